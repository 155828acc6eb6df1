// Tick Sweep
//
// Walks the pool's tick range in spacing-wide segments from the lowest to the
// highest initialized tick, tracking running liquidity from zero, and splits
// each segment's liquidity into the assets it actually locks.

use thiserror::Error;
use tracing::{debug, warn};
use v3lens_math::{sqrt_price_at_tick, Reserves};
use v3lens_tick::{current_range_bottom, is_valid_tick, validate_tick_spacing, TickError};

use crate::config::AnalysisConfig;
use crate::error::{PoolError, PoolResult};
use crate::state::PoolState;

// ============================================================
// SEGMENT RECORDS
// ============================================================

/// Where a segment sits relative to the segment holding the current price
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentPosition {
    /// Entirely below the price: holds only asset1
    BelowCurrent,
    /// Contains the current price: holds both assets
    Current,
    /// Entirely above the price: holds only asset0
    AboveCurrent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentRecord {
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Sum of the deltas applied on entering the segment
    pub liquidity_net: f64,
    /// Running liquidity over the segment.
    ///
    /// Negative when the deltas seen so far do not net out, in which case
    /// `locked` and `potential` are negative too.
    pub liquidity: f64,
    pub position: SegmentPosition,
    /// Amounts actually held at the current price
    pub locked: Reserves,
    /// Amounts the segment would hold if it were entirely asset0, or entirely asset1
    pub potential: Reserves,
}

impl SegmentRecord {
    /// Segment has a liquidity boundary or holds the current price
    pub fn is_boundary(&self) -> bool {
        self.liquidity_net != 0.0 || self.position == SegmentPosition::Current
    }
}

/// The current price lies outside the initialized tick range
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error(
    "current sqrt price {current_sqrt_price} is outside the initialized range [{min_sqrt_price}, {max_sqrt_price}]"
)]
pub struct RangeMismatch {
    pub current_sqrt_price: f64,
    pub min_sqrt_price: f64,
    pub max_sqrt_price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SweepSummary {
    /// Sum of every segment's `locked` amounts
    pub totals: Reserves,
    /// Running liquidity after the last segment, zero for a consistent pool
    pub final_liquidity: f64,
    pub segments: usize,
    pub range_mismatch: Option<RangeMismatch>,
}

// ============================================================
// SWEEP
// ============================================================

/// Iterator over a pool's tick segments, one record per segment
#[derive(Clone, Debug)]
pub struct TickSweep<'a> {
    state: &'a PoolState,
    next_tick: i32,
    last_tick: i32,
    current_bottom: i32,
    liquidity: f64,
    range_mismatch: Option<RangeMismatch>,
    failed: bool,
}

impl<'a> TickSweep<'a> {
    pub fn new(state: &'a PoolState) -> PoolResult<Self> {
        let (min_tick, max_tick) = match (state.ticks.min_tick(), state.ticks.max_tick()) {
            (Some(min_tick), Some(max_tick)) => (min_tick, max_tick),
            _ => return Err(PoolError::NoTickData),
        };
        if !is_valid_tick(min_tick) || !is_valid_tick(max_tick) {
            return Err(TickError::InvalidTickRange { lower: min_tick, upper: max_tick }.into());
        }
        let spacing = validate_tick_spacing(state.tick_spacing)?;

        let min_sqrt_price = sqrt_price_at_tick(min_tick);
        let max_sqrt_price = sqrt_price_at_tick(max_tick);
        let sqrt_price = state.current_sqrt_price;
        let range_mismatch = (sqrt_price < min_sqrt_price || sqrt_price > max_sqrt_price).then(|| {
            let mismatch = RangeMismatch { current_sqrt_price: sqrt_price, min_sqrt_price, max_sqrt_price };
            warn!(min_tick, max_tick, current_tick = state.current_tick, "{}", mismatch);
            mismatch
        });

        Ok(TickSweep {
            state,
            next_tick: current_range_bottom(min_tick, spacing),
            last_tick: current_range_bottom(max_tick, spacing),
            current_bottom: current_range_bottom(state.current_tick, spacing),
            liquidity: 0.0,
            range_mismatch,
            failed: false,
        })
    }

    pub fn range_mismatch(&self) -> Option<RangeMismatch> {
        self.range_mismatch
    }

    /// Only segments with a liquidity boundary, plus the current segment
    pub fn boundaries_only(self) -> impl Iterator<Item = PoolResult<SegmentRecord>> + 'a {
        self.filter(|segment| segment.as_ref().map_or(true, SegmentRecord::is_boundary))
    }

    /// All segments or boundaries only, as `config.include_empty_segments` selects
    pub fn for_report(self, config: &AnalysisConfig) -> Box<dyn Iterator<Item = PoolResult<SegmentRecord>> + 'a> {
        if config.include_empty_segments {
            Box::new(self)
        } else {
            Box::new(self.boundaries_only())
        }
    }

    /// Drain the sweep into totals
    #[tracing::instrument(
        skip_all,
        fields(current_tick = self.state.current_tick, tick_spacing = self.state.tick_spacing)
    )]
    pub fn summarize(mut self) -> PoolResult<SweepSummary> {
        debug!(from = self.next_tick, to = self.last_tick, "starting tick sweep");

        let mut totals = Reserves::ZERO;
        let mut segments = 0;
        for segment in self.by_ref() {
            totals += segment?.locked;
            segments += 1;
        }

        debug!(
            segments,
            amount0 = totals.amount0,
            amount1 = totals.amount1,
            final_liquidity = self.liquidity,
            "finished tick sweep"
        );
        Ok(SweepSummary {
            totals,
            final_liquidity: self.liquidity,
            segments,
            range_mismatch: self.range_mismatch,
        })
    }

    fn segment(&self, tick_lower: i32, tick_upper: i32, liquidity_net: f64) -> PoolResult<SegmentRecord> {
        let sa = sqrt_price_at_tick(tick_lower);
        let sb = sqrt_price_at_tick(tick_upper);
        let potential = Reserves::potential(self.liquidity, sa, sb)?;

        let (position, locked) = if tick_lower < self.current_bottom {
            (SegmentPosition::BelowCurrent, potential.only_amount1())
        } else if tick_lower == self.current_bottom {
            let locked = Reserves::for_liquidity(self.liquidity, self.state.current_sqrt_price, sa, sb)?;
            (SegmentPosition::Current, locked)
        } else {
            (SegmentPosition::AboveCurrent, potential.only_amount0())
        };

        Ok(SegmentRecord {
            tick_lower,
            tick_upper,
            liquidity_net,
            liquidity: self.liquidity,
            position,
            locked,
            potential,
        })
    }
}

impl Iterator for TickSweep<'_> {
    type Item = PoolResult<SegmentRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_tick > self.last_tick {
            return None;
        }

        let tick_lower = self.next_tick;
        let tick_upper = tick_lower + self.state.tick_spacing;
        let liquidity_net = self.state.ticks.net_in(tick_lower..tick_upper);

        self.liquidity += liquidity_net;
        self.next_tick = tick_upper;
        if self.liquidity < 0.0 {
            warn!(tick_lower, liquidity = self.liquidity, "running liquidity is negative");
        }

        let segment = self.segment(tick_lower, tick_upper, liquidity_net);
        self.failed = segment.is_err();
        Some(segment)
    }
}
