// Range Inversion
//
// Solves the in-range reserve equations
//   x = L * (sb - sp) / (sp * sb),  y = L * (sp - sa)
// for an unknown bound. Each bound has a form that takes liquidity as input
// and a form that eliminates it, so the two can cross-check each other.
// Results are prices (the squared sqrt-price bound) unless noted.

use crate::constants::DEGENERATE_EPSILON;
use crate::error::{MathError, MathResult};

// `scale` is the magnitude of the terms `value` was computed from.
fn non_degenerate(value: f64, scale: f64, precondition: &'static str) -> MathResult<f64> {
    if !value.is_finite() || value == 0.0 || value.abs() <= DEGENERATE_EPSILON * scale.abs() {
        Err(MathError::DegenerateInput { precondition })
    } else {
        Ok(value)
    }
}

fn squared_root(root: f64, precondition: &'static str) -> MathResult<f64> {
    if root.is_finite() && root >= 0.0 {
        Ok(root * root)
    } else {
        Err(MathError::DegenerateInput { precondition })
    }
}

// An upper bound at sqrt price zero is not a range.
fn squared_positive_root(root: f64, precondition: &'static str) -> MathResult<f64> {
    if root > 0.0 {
        squared_root(root, precondition)
    } else {
        Err(MathError::DegenerateInput { precondition })
    }
}

// ============================================================
// LOWER BOUND
// ============================================================

/// Lower price bound from liquidity
/// Formula: (sp - y / L)^2
pub fn lower_price_from_liquidity(liquidity: f64, sqrt_price: f64, amount1: f64) -> MathResult<f64> {
    let liquidity = non_degenerate(liquidity, liquidity, "liquidity must be non-zero")?;
    squared_root(
        sqrt_price - amount1 / liquidity,
        "amount1 / liquidity must not exceed the current sqrt price",
    )
}

/// Lower price bound from reserves only
/// Formula: (y / (sb * x) + sp - y / (sp * x))^2
pub fn lower_price_from_reserves(
    sqrt_price: f64,
    sqrt_upper: f64,
    amount0: f64,
    amount1: f64,
) -> MathResult<f64> {
    let amount0 = non_degenerate(amount0, amount0, "amount0 must be non-zero")?;
    let sqrt_upper = non_degenerate(sqrt_upper, sqrt_upper, "upper sqrt price must be non-zero")?;
    let sqrt_price = non_degenerate(sqrt_price, sqrt_price, "current sqrt price must be non-zero")?;

    squared_root(
        amount1 / (sqrt_upper * amount0) + sqrt_price - amount1 / (sqrt_price * amount0),
        "reserves imply a negative lower sqrt price",
    )
}

// ============================================================
// UPPER BOUND
// ============================================================

/// Upper price bound from liquidity
/// Formula: (L * sp / (L - sp * x))^2
pub fn upper_price_from_liquidity(liquidity: f64, sqrt_price: f64, amount0: f64) -> MathResult<f64> {
    let held = sqrt_price * amount0;
    let denominator = non_degenerate(
        liquidity - held,
        liquidity.abs() + held.abs(),
        "liquidity must differ from sqrt_price * amount0",
    )?;
    squared_positive_root(
        liquidity * sqrt_price / denominator,
        "liquidity must exceed sqrt_price * amount0",
    )
}

/// Upper price bound from reserves only
/// Formula: (sp * y / ((sa * sp - sp^2) * x + y))^2
pub fn upper_price_from_reserves(
    sqrt_price: f64,
    sqrt_lower: f64,
    amount0: f64,
    amount1: f64,
) -> MathResult<f64> {
    let price = sqrt_price * sqrt_price;
    let spread = (sqrt_lower * sqrt_price - price) * amount0;
    let denominator = non_degenerate(
        spread + amount1,
        spread.abs() + amount1.abs(),
        "(sa * sp - p) * amount0 + amount1 must be non-zero",
    )?;
    squared_positive_root(
        sqrt_price * amount1 / denominator,
        "reserves imply a non-positive upper sqrt price",
    )
}

// ============================================================
// NORMALIZED BOUND RATIOS
// ============================================================

/// Upper bound ratio `c = sb / sp` from the lower ratio `d = sa / sp`
/// Formula: y / ((d - 1) * p * x + y)
pub fn upper_ratio(price: f64, lower_ratio: f64, amount0: f64, amount1: f64) -> MathResult<f64> {
    let spread = (lower_ratio - 1.0) * price * amount0;
    let denominator = non_degenerate(
        spread + amount1,
        spread.abs() + amount1.abs(),
        "(d - 1) * p * amount0 + amount1 must be non-zero",
    )?;
    let ratio = amount1 / denominator;
    non_degenerate(ratio, ratio, "upper ratio must be non-zero")
}

/// Lower bound ratio `d = sa / sp` from the upper ratio `c = sb / sp`
/// Formula: 1 + y * (1 - c) / (c * p * x)
pub fn lower_ratio(price: f64, upper_ratio: f64, amount0: f64, amount1: f64) -> MathResult<f64> {
    let scale = upper_ratio * price * amount0;
    let denominator = non_degenerate(scale, scale, "c * p * amount0 must be non-zero")?;
    let ratio = 1.0 + amount1 * (1.0 - upper_ratio) / denominator;
    if ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(MathError::DegenerateInput { precondition: "c * p * amount0 must be non-zero" })
    }
}
