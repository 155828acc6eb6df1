// Tick Spacing and Alignment

use v3lens_math::{MAX_TICK, MIN_TICK};

use crate::error::{TickError, TickResult};

/// Reject a non-positive tick spacing
pub fn validate_tick_spacing(tick_spacing: i32) -> TickResult<i32> {
    if tick_spacing > 0 {
        Ok(tick_spacing)
    } else {
        Err(TickError::InvalidTickSpacing { spacing: tick_spacing })
    }
}

/// Snap tick to the nearest lower multiple of spacing.
///
/// Rounds toward negative infinity, so -1 with spacing 60 snaps to -60.
#[inline]
pub fn snap_tick_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    if tick_spacing <= 0 {
        return tick;
    }
    tick - tick.rem_euclid(tick_spacing)
}

/// Bottom tick of the spacing-wide segment containing `current_tick`
#[inline]
pub fn current_range_bottom(current_tick: i32, tick_spacing: i32) -> i32 {
    snap_tick_to_spacing(current_tick, tick_spacing)
}

/// Check if a tick sits on the spacing grid
#[inline]
pub fn is_aligned(tick: i32, tick_spacing: i32) -> bool {
    tick_spacing > 0 && tick.rem_euclid(tick_spacing) == 0
}

/// Check if a tick is within valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Validate a `[lower, upper)` tick range, and its alignment when a spacing is given
pub fn validate_tick_range(lower: i32, upper: i32, tick_spacing: Option<i32>) -> TickResult<()> {
    if lower >= upper || !is_valid_tick(lower) || !is_valid_tick(upper) {
        return Err(TickError::InvalidTickRange { lower, upper });
    }

    if let Some(spacing) = tick_spacing {
        let spacing = validate_tick_spacing(spacing)?;
        for tick in [lower, upper] {
            if !is_aligned(tick, spacing) {
                return Err(TickError::MisalignedTick { tick, spacing });
            }
        }
    }

    Ok(())
}
