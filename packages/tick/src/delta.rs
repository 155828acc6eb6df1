// Tick Liquidity Deltas

use serde::{Deserialize, Serialize};

use crate::number::number_or_string;

/// Net liquidity change applied when the price crosses `tick` upward
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickDelta {
    #[serde(rename = "tickIdx", deserialize_with = "number_or_string")]
    pub tick: i32,
    #[serde(rename = "liquidityNet", deserialize_with = "number_or_string")]
    pub liquidity_net: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TickList {
    Bare(Vec<TickDelta>),
    Wrapped { ticks: Vec<TickDelta> },
}

impl TickDelta {
    pub fn new(tick: i32, liquidity_net: f64) -> Self {
        TickDelta { tick, liquidity_net }
    }

    /// Decode a tick page, either a bare array or an indexer `{"ticks": [...]}` object
    pub fn list_from_json(json: &str) -> Result<Vec<TickDelta>, serde_json::Error> {
        Ok(match serde_json::from_str(json)? {
            TickList::Bare(ticks) | TickList::Wrapped { ticks } => ticks,
        })
    }
}
