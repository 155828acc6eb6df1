use thiserror::Error;
use v3lens_math::MathError;
use v3lens_tick::TickError;

#[derive(Error, Debug)]
pub enum PoolError {
    /// The pool has no initialized ticks to sweep
    #[error("no tick data: the liquidity net mapping is empty")]
    NoTickData,
    /// Implied volatility needs a positive locked amount
    #[error("no locked liquidity in the current tick range")]
    NoLockedLiquidity,
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(transparent)]
    Tick(#[from] TickError),
    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

pub type PoolResult<T> = Result<T, PoolError>;
