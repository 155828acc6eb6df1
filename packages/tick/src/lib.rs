// v3lens Tick Package
//
// Tick spacing/alignment helpers and the pool's tick -> liquidity net mapping.

pub mod delta;
pub mod error;
pub mod net_map;
pub mod number;
pub mod spacing;

pub use delta::TickDelta;
pub use error::{TickError, TickResult};
pub use net_map::LiquidityNetMap;
pub use number::{number_or_string, NumberOrString};
pub use spacing::{
    current_range_bottom,
    is_aligned,
    is_valid_tick,
    snap_tick_to_spacing,
    validate_tick_range,
    validate_tick_spacing,
};
