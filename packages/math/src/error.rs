use thiserror::Error;

/// Errors raised by the price range formulas.
///
/// Every variant is a caller input error: the same inputs always fail the
/// same way, so nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The range cannot be evaluated: bounds not strictly ordered, or a
    /// price inside it would put a zero in a denominator
    #[error("invalid range [{lower}, {upper}]: {reason}")]
    InvalidRange { lower: f64, upper: f64, reason: &'static str },
    /// A formula result does not fit in an f64
    #[error("{context} overflowed")]
    Overflow { context: &'static str },
    /// An inversion precondition does not hold, the bound cannot be recovered
    #[error("degenerate input: {precondition}")]
    DegenerateInput { precondition: &'static str },
}

pub type MathResult<T> = Result<T, MathError>;
