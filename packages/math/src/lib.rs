// v3lens Math Package
//
// Price/tick conversions and the closed-form liquidity <-> reserves algebra
// of a concentrated-liquidity range, in f64.

pub mod constants;
pub mod error;
pub mod inversion;
pub mod liquidity;
pub mod price;
pub mod region;
pub mod reserves;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::{MathError, MathResult};
pub use region::PriceRegion;
pub use reserves::Reserves;

// Re-export price functions
pub use price::{
    adjusted_amount,
    adjusted_price,
    price_at_tick,
    sqrt_price_at_tick,
    sqrt_price_from_x96,
    tick_at_price,
    tick_at_sqrt_price,
    tick_spacing_for_fee_tier,
};

// Re-export liquidity functions
pub use liquidity::{
    amount0_for_liquidity,
    amount1_for_liquidity,
    amounts_after_price_move,
    amounts_for_liquidity,
    check_range,
    liquidity_for_amount0,
    liquidity_for_amount1,
    liquidity_for_amounts,
};

// Re-export inversion functions
pub use inversion::{
    lower_price_from_liquidity,
    lower_price_from_reserves,
    lower_ratio,
    upper_price_from_liquidity,
    upper_price_from_reserves,
    upper_ratio,
};

/// Relative closeness check used for cross-checking float results.
///
/// Two zeros are equal; otherwise the difference is measured against the
/// larger magnitude.
pub fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= tolerance * scale
}
