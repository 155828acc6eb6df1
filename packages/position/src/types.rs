use serde::{Deserialize, Serialize};
use v3lens_math::{sqrt_price_at_tick, MathResult, Reserves};
use v3lens_tick::{number_or_string, validate_tick_range, NumberOrString, TickError, TickResult};

/// Liquidity provided over the tick range `[tick_lower, tick_upper)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord")]
pub struct Position {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: f64,
}

impl Position {
    pub fn new(tick_lower: i32, tick_upper: i32, liquidity: f64) -> TickResult<Self> {
        validate_tick_range(tick_lower, tick_upper, None)?;
        Ok(Position { tick_lower, tick_upper, liquidity })
    }

    pub fn sqrt_price_lower(&self) -> f64 {
        sqrt_price_at_tick(self.tick_lower)
    }

    pub fn sqrt_price_upper(&self) -> f64 {
        sqrt_price_at_tick(self.tick_upper)
    }

    /// Reserves held by this position at `current_sqrt_price`
    pub fn amounts(&self, current_sqrt_price: f64) -> MathResult<Reserves> {
        Reserves::for_liquidity(
            self.liquidity,
            current_sqrt_price,
            self.sqrt_price_lower(),
            self.sqrt_price_upper(),
        )
    }

    /// Whether the position's liquidity is part of the pool's active liquidity
    #[inline]
    pub fn is_active(&self, current_tick: i32) -> bool {
        self.tick_lower <= current_tick && current_tick < self.tick_upper
    }

    /// Decode positions, either a bare array or an indexer `{"positions": [...]}` object
    pub fn list_from_json(json: &str) -> Result<Vec<Position>, serde_json::Error> {
        Ok(match serde_json::from_str(json)? {
            PositionList::Bare(positions) | PositionList::Wrapped { positions } => positions,
        })
    }
}

// ============================================================
// INDEXER SHAPE
// ============================================================

// The indexer nests range bounds as `{"tickIdx": ...}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum TickRef {
    Nested {
        #[serde(rename = "tickIdx", deserialize_with = "number_or_string")]
        tick: i32,
    },
    Flat(NumberOrString<i32>),
}

impl TickRef {
    fn into_tick(self) -> Result<i32, String> {
        match self {
            TickRef::Nested { tick } => Ok(tick),
            TickRef::Flat(value) => value.into_value(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionRecord {
    #[serde(alias = "tick_lower")]
    tick_lower: TickRef,
    #[serde(alias = "tick_upper")]
    tick_upper: TickRef,
    #[serde(deserialize_with = "number_or_string")]
    liquidity: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum PositionDecodeError {
    #[error("invalid tick: {0}")]
    Tick(String),
    #[error(transparent)]
    Range(#[from] TickError),
}

impl TryFrom<PositionRecord> for Position {
    type Error = PositionDecodeError;

    fn try_from(record: PositionRecord) -> Result<Self, Self::Error> {
        let tick_lower = record.tick_lower.into_tick().map_err(PositionDecodeError::Tick)?;
        let tick_upper = record.tick_upper.into_tick().map_err(PositionDecodeError::Tick)?;
        Ok(Position::new(tick_lower, tick_upper, record.liquidity)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PositionList {
    Bare(Vec<Position>),
    Wrapped { positions: Vec<Position> },
}
