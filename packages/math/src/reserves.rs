// Reserve Pairs

use std::ops::{Add, AddAssign};

use crate::error::MathResult;
use crate::liquidity::amounts_for_liquidity;

/// Raw amounts of both assets held by some liquidity
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reserves {
    pub amount0: f64,
    pub amount1: f64,
}

impl Reserves {
    pub const ZERO: Reserves = Reserves { amount0: 0.0, amount1: 0.0 };

    pub fn new(amount0: f64, amount1: f64) -> Self {
        Reserves { amount0, amount1 }
    }

    /// Reserves of `liquidity` over `[sqrt_lower, sqrt_upper]` at `sqrt_price`
    pub fn for_liquidity(
        liquidity: f64,
        sqrt_price: f64,
        sqrt_lower: f64,
        sqrt_upper: f64,
    ) -> MathResult<Self> {
        let (amount0, amount1) = amounts_for_liquidity(liquidity, sqrt_price, sqrt_lower, sqrt_upper)?;
        Ok(Reserves { amount0, amount1 })
    }

    /// Reserves if all of `liquidity` sat on one side of the range:
    /// amount0 as if the price were at the lower bound, amount1 as if at the upper.
    pub fn potential(liquidity: f64, sqrt_lower: f64, sqrt_upper: f64) -> MathResult<Self> {
        let (amount0, _) = amounts_for_liquidity(liquidity, sqrt_lower, sqrt_lower, sqrt_upper)?;
        let (_, amount1) = amounts_for_liquidity(liquidity, sqrt_upper, sqrt_lower, sqrt_upper)?;
        Ok(Reserves { amount0, amount1 })
    }

    /// Keep only the asset0 side
    pub fn only_amount0(self) -> Self {
        Reserves { amount0: self.amount0, amount1: 0.0 }
    }

    /// Keep only the asset1 side
    pub fn only_amount1(self) -> Self {
        Reserves { amount0: 0.0, amount1: self.amount1 }
    }
}

impl Add for Reserves {
    type Output = Reserves;

    fn add(self, rhs: Reserves) -> Reserves {
        Reserves {
            amount0: self.amount0 + rhs.amount0,
            amount1: self.amount1 + rhs.amount1,
        }
    }
}

impl AddAssign for Reserves {
    fn add_assign(&mut self, rhs: Reserves) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Reserves {
    fn sum<I: Iterator<Item = Reserves>>(iter: I) -> Reserves {
        iter.fold(Reserves::ZERO, Add::add)
    }
}
