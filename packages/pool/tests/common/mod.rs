#![allow(dead_code)]

use v3lens_math::relative_eq;
use v3lens_pool::{LiquidityNetMap, PoolState, Position, TickDelta};

/// Assert two floats agree within a relative tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        relative_eq(actual, expected, tolerance),
        "{}: expected {} got {} (tolerance {})",
        what,
        expected,
        actual,
        tolerance
    );
}

/// Tick mapping produced by a set of positions
pub fn net_map_for(positions: &[Position]) -> LiquidityNetMap {
    let mut map = LiquidityNetMap::new();
    for position in positions {
        let lower = map.get(position.tick_lower).unwrap_or(0.0);
        map.insert(position.tick_lower, lower + position.liquidity);
        let upper = map.get(position.tick_upper).unwrap_or(0.0);
        map.insert(position.tick_upper, upper - position.liquidity);
    }
    map
}

/// Pool at `current_tick` whose mapping and active liquidity come from `positions`
pub fn pool_with_positions(current_tick: i32, tick_spacing: i32, positions: &[Position]) -> PoolState {
    let liquidity = positions
        .iter()
        .filter(|position| position.is_active(current_tick))
        .map(|position| position.liquidity)
        .sum();
    PoolState::at_tick(current_tick, tick_spacing, liquidity, net_map_for(positions)).unwrap()
}

pub fn deltas(pairs: &[(i32, f64)]) -> Vec<TickDelta> {
    pairs.iter().map(|&(tick, net)| TickDelta::new(tick, net)).collect()
}

pub const USDC_ETH_POOL: &str = r#"{
    "data": {
        "pools": [
            {
                "tick": "202919",
                "sqrtPrice": "2018367467030557039688602701791232",
                "liquidity": "20460728096789227187",
                "feeTier": "3000",
                "token0": { "symbol": "USDC", "decimals": "6" },
                "token1": { "symbol": "WETH", "decimals": "18" }
            }
        ]
    }
}"#;
