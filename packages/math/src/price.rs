// Tick <-> Price Conversions

use crate::constants::{
    DEFAULT_TICK_SPACING, FEE_TIER_TICK_SPACINGS, MAX_TICK, MIN_TICK, Q96, TICK_BASE,
};
use crate::error::{MathError, MathResult};

/// Convert tick to price
/// Formula: 1.0001^tick (raw units of asset1 per asset0)
pub fn price_at_tick(tick: i32) -> f64 {
    TICK_BASE.powf(f64::from(tick))
}

/// Convert tick to sqrt price
/// Formula: 1.0001^(tick / 2), halving the exponent instead of taking a square root
pub fn sqrt_price_at_tick(tick: i32) -> f64 {
    TICK_BASE.powf(f64::from(tick) / 2.0)
}

/// Greatest tick whose price does not exceed `price`, clamped to the valid tick range
pub fn tick_at_price(price: f64) -> MathResult<i32> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MathError::DegenerateInput {
            precondition: "price must be positive and finite",
        });
    }
    Ok(floor_tick(price.ln() / TICK_BASE.ln(), |tick| price_at_tick(tick) <= price))
}

/// Greatest tick whose sqrt price does not exceed `sqrt_price`
pub fn tick_at_sqrt_price(sqrt_price: f64) -> MathResult<i32> {
    if !sqrt_price.is_finite() || sqrt_price <= 0.0 {
        return Err(MathError::DegenerateInput {
            precondition: "sqrt price must be positive and finite",
        });
    }
    Ok(floor_tick(2.0 * sqrt_price.ln() / TICK_BASE.ln(), |tick| {
        sqrt_price_at_tick(tick) <= sqrt_price
    }))
}

// The log estimate can land one tick off either way at exact tick prices.
fn floor_tick(estimate: f64, at_or_below: impl Fn(i32) -> bool) -> i32 {
    let mut tick = (estimate.floor() as i64).clamp(i64::from(MIN_TICK), i64::from(MAX_TICK)) as i32;
    if tick < MAX_TICK && at_or_below(tick + 1) {
        tick += 1;
    } else if tick > MIN_TICK && !at_or_below(tick) {
        tick -= 1;
    }
    tick
}

/// Tick spacing for a fee tier (hundredths of a basis point), 60 for unknown tiers
pub fn tick_spacing_for_fee_tier(fee_tier: u32) -> i32 {
    FEE_TIER_TICK_SPACINGS
        .iter()
        .find(|(tier, _)| *tier == fee_tier)
        .map(|(_, spacing)| *spacing)
        .unwrap_or(DEFAULT_TICK_SPACING)
}

/// Convert an on-chain Q64.96 sqrt price to a real sqrt price
pub fn sqrt_price_from_x96(sqrt_price_x96: f64) -> f64 {
    sqrt_price_x96 / Q96
}

/// Scale a raw price by the tokens' decimal precision for display
pub fn adjusted_price(price: f64, decimals0: u8, decimals1: u8) -> f64 {
    price / 10f64.powi(i32::from(decimals1) - i32::from(decimals0))
}

/// Scale a raw token amount by its decimal precision for display
pub fn adjusted_amount(amount: f64, decimals: u8) -> f64 {
    amount / 10f64.powi(i32::from(decimals))
}
