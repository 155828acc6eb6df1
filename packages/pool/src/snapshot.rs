// Pool Snapshot
//
// A pool as returned by the indexer, before any derived values are computed.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use v3lens_math::{adjusted_price, price_at_tick, sqrt_price_from_x96};
use v3lens_tick::number_or_string;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub symbol: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub decimals: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    #[serde(deserialize_with = "number_or_string")]
    pub tick: i32,
    /// On-chain Q64.96 sqrt price
    #[serde(rename = "sqrtPrice", alias = "sqrtPriceX96", deserialize_with = "number_or_string")]
    pub sqrt_price_x96: f64,
    /// Active liquidity of the current tick
    #[serde(deserialize_with = "number_or_string")]
    pub liquidity: f64,
    /// Fee in hundredths of a basis point
    #[serde(deserialize_with = "number_or_string")]
    pub fee_tier: u32,
    #[serde(default)]
    pub token0: TokenInfo,
    #[serde(default)]
    pub token1: TokenInfo,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PoolResponse {
    Data { data: PoolList },
    List(PoolList),
    Single(PoolSnapshot),
}

#[derive(Deserialize)]
struct PoolList {
    pools: Vec<PoolSnapshot>,
}

impl PoolSnapshot {
    /// Decode a pool from a bare object or an indexer `{"pools": [...]}` response,
    /// optionally wrapped in `{"data": ...}`. The first listed pool is used.
    pub fn from_json(json: &str) -> Result<PoolSnapshot, serde_json::Error> {
        let pools = match serde_json::from_str(json)? {
            PoolResponse::Single(pool) => return Ok(pool),
            PoolResponse::Data { data } => data.pools,
            PoolResponse::List(list) => list.pools,
        };
        pools
            .into_iter()
            .next()
            .ok_or_else(|| serde_json::Error::custom("pool not found: response lists no pools"))
    }

    pub fn sqrt_price(&self) -> f64 {
        sqrt_price_from_x96(self.sqrt_price_x96)
    }

    pub fn token0_decimals(&self) -> u8 {
        self.token0.decimals
    }

    pub fn token1_decimals(&self) -> u8 {
        self.token1.decimals
    }

    /// Price of the current tick in whole token1 per whole token0
    pub fn adjusted_price(&self) -> f64 {
        adjusted_price(price_at_tick(self.tick), self.token0.decimals, self.token1.decimals)
    }
}
