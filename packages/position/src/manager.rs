// Position Queries
//
// Reserves and active liquidity over a set of positions at the current price.

use thiserror::Error;
use tracing::warn;
use v3lens_math::{relative_eq, MathResult, Reserves};
use v3lens_tick::{validate_tick_range, TickResult};

use crate::types::Position;

// ============================================================
// POSITION VALIDATION
// ============================================================

/// Validate position parameters against the pool's tick spacing
pub fn validate_position_params(lower: i32, upper: i32, tick_spacing: i32) -> TickResult<()> {
    validate_tick_range(lower, upper, Some(tick_spacing))
}

// ============================================================
// AGGREGATION
// ============================================================

/// One position with its reserves at the current price
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionEntry {
    pub position: Position,
    pub reserves: Reserves,
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionsSummary {
    /// Entries in ascending `(tick_lower, tick_upper)` order
    pub entries: Vec<PositionEntry>,
    /// Reserves summed over every position
    pub reserves: Reserves,
    /// Liquidity summed over the active positions only
    pub active_liquidity: f64,
}

/// The pool's reported liquidity disagrees with the sum over its active positions
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("active positions hold liquidity {positions}, pool reports {pool}")]
pub struct LiquidityMismatch {
    pub positions: f64,
    pub pool: f64,
}

impl PositionsSummary {
    pub fn active(&self) -> impl Iterator<Item = &PositionEntry> {
        self.entries.iter().filter(|entry| entry.active)
    }

    /// Compare the active liquidity with the pool's, `None` when they agree within `tolerance`
    pub fn check_pool_liquidity(&self, pool_liquidity: f64, tolerance: f64) -> Option<LiquidityMismatch> {
        if relative_eq(self.active_liquidity, pool_liquidity, tolerance) {
            return None;
        }
        let mismatch = LiquidityMismatch { positions: self.active_liquidity, pool: pool_liquidity };
        warn!(positions = mismatch.positions, pool = mismatch.pool, "{}", mismatch);
        Some(mismatch)
    }
}

/// Sum reserves and active liquidity over `positions` at the current price
pub fn aggregate_positions(
    positions: &[Position],
    current_tick: i32,
    current_sqrt_price: f64,
) -> MathResult<PositionsSummary> {
    let mut sorted = positions.to_vec();
    sorted.sort_by_key(|position| (position.tick_lower, position.tick_upper));

    let mut summary = PositionsSummary::default();
    for position in sorted {
        let reserves = position.amounts(current_sqrt_price)?;
        let active = position.is_active(current_tick);

        summary.reserves += reserves;
        if active {
            summary.active_liquidity += position.liquidity;
        }
        summary.entries.push(PositionEntry { position, reserves, active });
    }

    Ok(summary)
}
