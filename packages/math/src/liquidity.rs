// Liquidity Calculations
//
// All inputs are sqrt prices. A range is `[sqrt_lower, sqrt_upper]` with
// `sqrt_lower < sqrt_upper`.

use crate::error::{MathError, MathResult};
use crate::region::PriceRegion;

/// Validate that a sqrt price range is finite, non-negative and strictly ordered
pub fn check_range(sqrt_lower: f64, sqrt_upper: f64) -> MathResult<()> {
    let ordered = sqrt_lower.is_finite()
        && sqrt_upper.is_finite()
        && sqrt_lower >= 0.0
        && sqrt_upper > sqrt_lower;
    if ordered {
        Ok(())
    } else {
        Err(MathError::InvalidRange {
            lower: sqrt_lower,
            upper: sqrt_upper,
            reason: "bounds must be finite, non-negative and strictly ordered",
        })
    }
}

fn ensure_finite(value: f64, context: &'static str) -> MathResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::Overflow { context })
    }
}

// ============================================================
// LIQUIDITY FROM RESERVES
// ============================================================

/// Calculate liquidity from token0 amount
/// Formula: x * sa * sb / (sb - sa)
pub fn liquidity_for_amount0(amount0: f64, sqrt_lower: f64, sqrt_upper: f64) -> MathResult<f64> {
    check_range(sqrt_lower, sqrt_upper)?;
    ensure_finite(
        amount0 * sqrt_lower * sqrt_upper / (sqrt_upper - sqrt_lower),
        "liquidity for amount0",
    )
}

/// Calculate liquidity from token1 amount
/// Formula: y / (sb - sa)
pub fn liquidity_for_amount1(amount1: f64, sqrt_lower: f64, sqrt_upper: f64) -> MathResult<f64> {
    check_range(sqrt_lower, sqrt_upper)?;
    ensure_finite(amount1 / (sqrt_upper - sqrt_lower), "liquidity for amount1")
}

/// Calculate the largest liquidity both token amounts can back at the current price.
///
/// Inside the range each asset gives its own estimate and the smaller one
/// wins, so neither reserve is oversubscribed.
pub fn liquidity_for_amounts(
    amount0: f64,
    amount1: f64,
    sqrt_price: f64,
    sqrt_lower: f64,
    sqrt_upper: f64,
) -> MathResult<f64> {
    check_range(sqrt_lower, sqrt_upper)?;

    match PriceRegion::locate(sqrt_price, sqrt_lower, sqrt_upper) {
        PriceRegion::BelowRange => liquidity_for_amount0(amount0, sqrt_lower, sqrt_upper),
        PriceRegion::AboveRange => liquidity_for_amount1(amount1, sqrt_lower, sqrt_upper),
        PriceRegion::InRange => {
            let liq0 = liquidity_for_amount0(amount0, sqrt_price, sqrt_upper)?;
            let liq1 = liquidity_for_amount1(amount1, sqrt_lower, sqrt_price)?;
            Ok(liq0.min(liq1))
        }
    }
}

// ============================================================
// RESERVES FROM LIQUIDITY
// ============================================================

// A price outside the range behaves as the nearest endpoint.
fn clamped_sqrt_price(sqrt_price: f64, sqrt_lower: f64, sqrt_upper: f64) -> MathResult<f64> {
    check_range(sqrt_lower, sqrt_upper)?;
    if sqrt_price.is_nan() {
        return Err(MathError::InvalidRange {
            lower: sqrt_lower,
            upper: sqrt_upper,
            reason: "sqrt price is not a number",
        });
    }
    let sp = sqrt_price.clamp(sqrt_lower, sqrt_upper);
    if sp == 0.0 {
        return Err(MathError::InvalidRange {
            lower: sqrt_lower,
            upper: sqrt_upper,
            reason: "clamped sqrt price is zero",
        });
    }
    Ok(sp)
}

/// Calculate token0 amount held by `liquidity` over the range at the current price
/// Formula: L * (sb - sp) / (sp * sb), sp clamped into the range
pub fn amount0_for_liquidity(
    liquidity: f64,
    sqrt_price: f64,
    sqrt_lower: f64,
    sqrt_upper: f64,
) -> MathResult<f64> {
    let sp = clamped_sqrt_price(sqrt_price, sqrt_lower, sqrt_upper)?;
    ensure_finite(
        liquidity * (sqrt_upper - sp) / (sp * sqrt_upper),
        "amount0 for liquidity",
    )
}

/// Calculate token1 amount held by `liquidity` over the range at the current price
/// Formula: L * (sp - sa), sp clamped into the range
pub fn amount1_for_liquidity(
    liquidity: f64,
    sqrt_price: f64,
    sqrt_lower: f64,
    sqrt_upper: f64,
) -> MathResult<f64> {
    let sp = clamped_sqrt_price(sqrt_price, sqrt_lower, sqrt_upper)?;
    ensure_finite(liquidity * (sp - sqrt_lower), "amount1 for liquidity")
}

/// Calculate both token amounts from liquidity
pub fn amounts_for_liquidity(
    liquidity: f64,
    sqrt_price: f64,
    sqrt_lower: f64,
    sqrt_upper: f64,
) -> MathResult<(f64, f64)> {
    Ok((
        amount0_for_liquidity(liquidity, sqrt_price, sqrt_lower, sqrt_upper)?,
        amount1_for_liquidity(liquidity, sqrt_price, sqrt_lower, sqrt_upper)?,
    ))
}

/// Move a position's reserves from one price to another using the delta form:
/// dx = L * (1/sp_to - 1/sp_from), dy = L * (sp_to - sp_from).
///
/// Both prices are clamped into the range first, the deltas only hold there.
pub fn amounts_after_price_move(
    liquidity: f64,
    amount0: f64,
    amount1: f64,
    sqrt_price_from: f64,
    sqrt_price_to: f64,
    sqrt_lower: f64,
    sqrt_upper: f64,
) -> MathResult<(f64, f64)> {
    let from = clamped_sqrt_price(sqrt_price_from, sqrt_lower, sqrt_upper)?;
    let to = clamped_sqrt_price(sqrt_price_to, sqrt_lower, sqrt_upper)?;

    let delta0 = ensure_finite(liquidity * (1.0 / to - 1.0 / from), "amount0 delta")?;
    let delta1 = ensure_finite(liquidity * (to - from), "amount1 delta")?;

    Ok((amount0 + delta0, amount1 + delta1))
}
