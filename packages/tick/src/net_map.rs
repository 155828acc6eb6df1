// LiquidityNet Mapping

use std::collections::BTreeMap;
use std::ops::RangeBounds;

use tracing::warn;

use crate::delta::TickDelta;
use crate::spacing::is_aligned;

/// Ordered tick -> liquidity net mapping of a pool.
///
/// Iteration is always in ascending tick order. For consistent pool state the
/// deltas sum to zero, but that is not enforced here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LiquidityNetMap {
    ticks: BTreeMap<i32, f64>,
}

impl LiquidityNetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mapping from deltas in any order; a repeated tick keeps the last value.
    ///
    /// With `tick_spacing`, deltas off the spacing grid are logged but kept.
    pub fn from_deltas(deltas: impl IntoIterator<Item = TickDelta>, tick_spacing: Option<i32>) -> Self {
        let mut map = Self::new();
        for delta in deltas {
            if let Some(spacing) = tick_spacing {
                if !is_aligned(delta.tick, spacing) {
                    warn!(tick = delta.tick, spacing, "tick delta is not aligned to the tick spacing");
                }
            }
            if let Some(previous) = map.insert(delta.tick, delta.liquidity_net) {
                warn!(
                    tick = delta.tick,
                    previous,
                    replacement = delta.liquidity_net,
                    "duplicate tick delta, keeping the last one"
                );
            }
        }
        map
    }

    /// Set the delta of a tick, returning the one it replaced
    pub fn insert(&mut self, tick: i32, liquidity_net: f64) -> Option<f64> {
        self.ticks.insert(tick, liquidity_net)
    }

    pub fn get(&self, tick: i32) -> Option<f64> {
        self.ticks.get(&tick).copied()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn min_tick(&self) -> Option<i32> {
        self.ticks.keys().next().copied()
    }

    pub fn max_tick(&self) -> Option<i32> {
        self.ticks.keys().next_back().copied()
    }

    /// Sum of all deltas, zero for a consistent pool
    pub fn net_sum(&self) -> f64 {
        self.ticks.values().sum()
    }

    /// Sum of the deltas with ticks in `range`
    pub fn net_in<R: RangeBounds<i32>>(&self, range: R) -> f64 {
        self.ticks.range(range).map(|(_, net)| net).sum()
    }

    /// Deltas with ticks in `range`, ascending
    pub fn range<R: RangeBounds<i32>>(&self, range: R) -> impl Iterator<Item = TickDelta> + '_ {
        self.ticks.range(range).map(|(&tick, &liquidity_net)| TickDelta { tick, liquidity_net })
    }

    /// All deltas, ascending
    pub fn iter(&self) -> impl Iterator<Item = TickDelta> + '_ {
        self.range(..)
    }

    /// Running liquidity just above `tick`: the sum of every delta at or below it
    pub fn liquidity_at(&self, tick: i32) -> f64 {
        self.net_in(..=tick)
    }
}

impl FromIterator<TickDelta> for LiquidityNetMap {
    fn from_iter<I: IntoIterator<Item = TickDelta>>(iter: I) -> Self {
        Self::from_deltas(iter, None)
    }
}
