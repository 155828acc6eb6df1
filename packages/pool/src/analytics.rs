// Pool Analytics
//
// Views of the current tick range and the volume-based volatility estimate.

use v3lens_math::{sqrt_price_at_tick, MathError, Reserves, FEE_TIER_DENOMINATOR};
use v3lens_position::{aggregate_positions, LiquidityMismatch, Position, PositionsSummary};
use v3lens_tick::current_range_bottom;

use crate::error::{PoolError, PoolResult};
use crate::state::PoolState;

const DAYS_PER_YEAR: f64 = 365.0;

impl PoolState {
    /// `[bottom, top)` ticks of the spacing-wide segment holding the current tick
    pub fn current_range(&self) -> (i32, i32) {
        let bottom = current_range_bottom(self.current_tick, self.tick_spacing);
        (bottom, bottom + self.tick_spacing)
    }

    /// Amounts the pool's active liquidity holds in the current tick range
    pub fn current_range_reserves(&self) -> PoolResult<Reserves> {
        let (bottom, top) = self.current_range();
        Ok(Reserves::for_liquidity(
            self.liquidity,
            self.current_sqrt_price,
            sqrt_price_at_tick(bottom),
            sqrt_price_at_tick(top),
        )?)
    }

    /// Asset0 the current tick range would hold if the price sat at its bottom
    pub fn current_range_potential_amount0(&self) -> PoolResult<f64> {
        let (bottom, top) = self.current_range();
        let potential = Reserves::potential(self.liquidity, sqrt_price_at_tick(bottom), sqrt_price_at_tick(top))?;
        Ok(potential.amount0)
    }

    /// Aggregate `positions` at the pool's price and check them against the pool's liquidity
    pub fn positions_summary(
        &self,
        positions: &[Position],
        tolerance: f64,
    ) -> PoolResult<(PositionsSummary, Option<LiquidityMismatch>)> {
        let summary = aggregate_positions(positions, self.current_tick, self.current_sqrt_price)?;
        let mismatch = summary.check_pool_liquidity(self.liquidity, tolerance);
        Ok((summary, mismatch))
    }
}

/// Annualized implied volatility from one day of volume, as a fraction.
///
/// Formula: 2 * fee * sqrt(volume / locked) * sqrt(365), with `fee = fee_tier / 1e6`
/// and `locked` the current range's value in the volume's unit.
pub fn implied_volatility(fee_tier: u32, volume: f64, locked: f64) -> PoolResult<f64> {
    if !locked.is_finite() || locked <= 0.0 {
        return Err(PoolError::NoLockedLiquidity);
    }
    if !volume.is_finite() || volume < 0.0 {
        return Err(MathError::DegenerateInput { precondition: "volume must be non-negative and finite" }.into());
    }
    let fee = f64::from(fee_tier) / FEE_TIER_DENOMINATOR;
    Ok(2.0 * fee * (volume / locked).sqrt() * DAYS_PER_YEAR.sqrt())
}
