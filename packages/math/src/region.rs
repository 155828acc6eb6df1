// Price Region Classification

/// Where the current price sits relative to a range.
///
/// Every reserve/liquidity formula branches on this: below the range only
/// asset0 is held, above it only asset1, inside it both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PriceRegion {
    /// `sqrt_price <= sqrt_lower`
    BelowRange,
    /// `sqrt_lower < sqrt_price < sqrt_upper`
    InRange,
    /// `sqrt_price >= sqrt_upper`
    AboveRange,
}

impl PriceRegion {
    /// Classify a sqrt price against `[sqrt_lower, sqrt_upper]`
    pub fn locate(sqrt_price: f64, sqrt_lower: f64, sqrt_upper: f64) -> Self {
        if sqrt_price <= sqrt_lower {
            PriceRegion::BelowRange
        } else if sqrt_price < sqrt_upper {
            PriceRegion::InRange
        } else {
            PriceRegion::AboveRange
        }
    }

    /// Whether a range in this region holds any asset0
    #[inline]
    pub fn holds_amount0(self) -> bool {
        self != PriceRegion::AboveRange
    }

    /// Whether a range in this region holds any asset1
    #[inline]
    pub fn holds_amount1(self) -> bool {
        self != PriceRegion::BelowRange
    }
}
