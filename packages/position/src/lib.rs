// v3lens Position Package
//
// Liquidity positions over tick ranges: validation, reserves at a price and
// aggregation across a pool's positions.

pub mod manager;
pub mod types;

pub use manager::{
    aggregate_positions,
    validate_position_params,
    LiquidityMismatch,
    PositionEntry,
    PositionsSummary,
};
pub use types::{Position, PositionDecodeError};
