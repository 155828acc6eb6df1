// Pool State

use tracing::warn;
use v3lens_math::{sqrt_price_at_tick, MathError};
use v3lens_tick::{is_valid_tick, validate_tick_spacing, LiquidityNetMap, TickDelta, TickError};

use crate::config::AnalysisConfig;
use crate::error::PoolResult;
use crate::snapshot::PoolSnapshot;
use crate::sweep::TickSweep;

/// Immutable snapshot of a pool: price, active liquidity and the tick mapping
#[derive(Clone, Debug, PartialEq)]
pub struct PoolState {
    pub current_tick: i32,
    pub current_sqrt_price: f64,
    pub tick_spacing: i32,
    /// Active liquidity of the current tick
    pub liquidity: f64,
    pub ticks: LiquidityNetMap,
}

impl PoolState {
    pub fn new(
        current_tick: i32,
        current_sqrt_price: f64,
        tick_spacing: i32,
        liquidity: f64,
        ticks: LiquidityNetMap,
    ) -> PoolResult<Self> {
        let tick_spacing = validate_tick_spacing(tick_spacing)?;
        if !is_valid_tick(current_tick) {
            return Err(TickError::InvalidTickRange { lower: current_tick, upper: current_tick }.into());
        }
        if !current_sqrt_price.is_finite() || current_sqrt_price <= 0.0 {
            return Err(MathError::DegenerateInput {
                precondition: "current sqrt price must be positive and finite",
            }
            .into());
        }
        Ok(PoolState { current_tick, current_sqrt_price, tick_spacing, liquidity, ticks })
    }

    /// State whose sqrt price is exactly that of `current_tick`
    pub fn at_tick(
        current_tick: i32,
        tick_spacing: i32,
        liquidity: f64,
        ticks: LiquidityNetMap,
    ) -> PoolResult<Self> {
        Self::new(current_tick, sqrt_price_at_tick(current_tick), tick_spacing, liquidity, ticks)
    }

    /// Build the state from an indexer snapshot and its tick deltas
    #[tracing::instrument(skip_all, fields(tick = snapshot.tick, fee_tier = snapshot.fee_tier))]
    pub fn from_snapshot(
        snapshot: &PoolSnapshot,
        deltas: impl IntoIterator<Item = TickDelta>,
        config: &AnalysisConfig,
    ) -> PoolResult<Self> {
        let tick_spacing = validate_tick_spacing(config.tick_spacing_for_fee_tier(snapshot.fee_tier))?;
        let ticks = LiquidityNetMap::from_deltas(deltas, Some(tick_spacing));

        let state = Self::new(snapshot.tick, snapshot.sqrt_price(), tick_spacing, snapshot.liquidity, ticks)?;
        state.check_sqrt_price(config.relative_tolerance);
        Ok(state)
    }

    /// Whether the sqrt price lies within the current tick, widened by `tolerance`.
    ///
    /// A mismatch is logged and otherwise ignored.
    pub fn check_sqrt_price(&self, tolerance: f64) -> bool {
        let lower = sqrt_price_at_tick(self.current_tick) * (1.0 - tolerance);
        let upper = sqrt_price_at_tick(self.current_tick.saturating_add(1)) * (1.0 + tolerance);
        let consistent = (lower..=upper).contains(&self.current_sqrt_price);
        if !consistent {
            warn!(
                current_tick = self.current_tick,
                current_sqrt_price = self.current_sqrt_price,
                expected_lower = lower,
                expected_upper = upper,
                "sqrt price does not match the current tick"
            );
        }
        consistent
    }

    /// Lazily walk every tick segment of the pool, lowest first
    pub fn sweep(&self) -> PoolResult<TickSweep<'_>> {
        TickSweep::new(self)
    }
}
