// v3lens Pool Package
//
// Pool snapshots and the analyses built on them: the full-range tick sweep,
// current range views and implied volatility.

pub mod analytics;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod state;
pub mod sweep;

pub use analytics::implied_volatility;
pub use config::AnalysisConfig;
pub use error::{PoolError, PoolResult};
pub use snapshot::{PoolSnapshot, TokenInfo};
pub use state::PoolState;
pub use sweep::{RangeMismatch, SegmentPosition, SegmentRecord, SweepSummary, TickSweep};

// Re-export the building blocks callers need alongside a pool
pub use v3lens_math::Reserves;
pub use v3lens_position::{LiquidityMismatch, Position, PositionsSummary};
pub use v3lens_tick::{LiquidityNetMap, TickDelta};
