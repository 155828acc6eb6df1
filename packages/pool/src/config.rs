// Analysis Configuration

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use v3lens_math::FEE_TIER_TICK_SPACINGS;

use crate::error::PoolResult;

/// Tolerances and lookup overrides for pool analysis.
///
/// Every field is optional in TOML:
///
/// ```toml
/// relative_tolerance = 1e-9
/// include_empty_segments = false
/// default_tick_spacing = 60
///
/// [fee_tiers]
/// 2500 = 50
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Relative tolerance of the sqrt-price/tick and liquidity consistency checks
    pub relative_tolerance: f64,
    /// Walk every segment instead of only liquidity boundaries and the current one
    pub include_empty_segments: bool,
    /// Tick spacing of fee tiers found in neither `fee_tiers` nor the standard table
    pub default_tick_spacing: i32,
    /// Fee tier -> tick spacing entries layered over the standard table
    #[serde(deserialize_with = "fee_tier_map")]
    pub fee_tiers: BTreeMap<u32, i32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            relative_tolerance: 1e-9,
            include_empty_segments: false,
            default_tick_spacing: v3lens_math::DEFAULT_TICK_SPACING,
            fee_tiers: BTreeMap::new(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(source: &str) -> PoolResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> PoolResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn tick_spacing_for_fee_tier(&self, fee_tier: u32) -> i32 {
        if let Some(spacing) = self.fee_tiers.get(&fee_tier) {
            return *spacing;
        }
        FEE_TIER_TICK_SPACINGS
            .iter()
            .find(|(tier, _)| *tier == fee_tier)
            .map(|(_, spacing)| *spacing)
            .unwrap_or(self.default_tick_spacing)
    }
}

// TOML keys are always strings.
fn fee_tier_map<'de, D>(deserializer: D) -> Result<BTreeMap<u32, i32>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, i32>::deserialize(deserializer)?
        .into_iter()
        .map(|(tier, spacing)| match tier.trim().parse::<u32>() {
            Ok(fee_tier) => Ok((fee_tier, spacing)),
            Err(err) => Err(de::Error::custom(format!("invalid fee tier {:?}: {}", tier, err))),
        })
        .collect()
}
