use thiserror::Error;

/// Errors raised by tick grid and tick range validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    /// Tick spacing is zero or negative
    #[error("invalid tick spacing {spacing}: must be positive")]
    InvalidTickSpacing { spacing: i32 },
    /// Range bounds are out of order, or a tick lies outside `[MIN_TICK, MAX_TICK]`
    #[error("invalid tick range [{lower}, {upper}]: lower must be below upper and both within the tick bounds")]
    InvalidTickRange { lower: i32, upper: i32 },
    /// A tick does not sit on the spacing grid
    #[error("tick {tick} is not a multiple of tick spacing {spacing}")]
    MisalignedTick { tick: i32, spacing: i32 },
}

pub type TickResult<T> = Result<T, TickError>;
