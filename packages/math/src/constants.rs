// Constants module for the range math.
//
// Grouped by functionality, one doc line per constant.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Base of the log-spaced price grid: price(tick) = TICK_BASE^tick
pub const TICK_BASE: f64 = 1.0001;

/// Minimum valid tick value (corresponds to minimum price)
/// Price at MIN_TICK ≈ 2.94e-39
pub const MIN_TICK: i32 = -887272;

/// Maximum valid tick value (corresponds to maximum price)
/// Price at MAX_TICK ≈ 3.40e+38
pub const MAX_TICK: i32 = 887272;

// ============================================================
// FEE TIER CONSTANTS
// ============================================================

/// Fee tiers are quoted in hundredths of a basis point (3000 = 0.30%)
pub const FEE_TIER_DENOMINATOR: f64 = 1_000_000.0;

/// Tick spacing used for fee tiers missing from the table
pub const DEFAULT_TICK_SPACING: i32 = 60;

/// Standard fee tier -> tick spacing table
pub const FEE_TIER_TICK_SPACINGS: [(u32, i32); 4] = [
    (100, 1),
    (500, 10),
    (3000, 60),
    (10000, 200),
];

// ============================================================
// FIXED POINT CONSTANTS
// ============================================================

/// 2^96, the scale of on-chain sqrtPriceX96 values
pub const Q96: f64 = (1u128 << 96) as f64;

// ============================================================
// TOLERANCE CONSTANTS
// ============================================================

/// Relative size under which a denominator is treated as zero
/// when inverting the range equations
pub const DEGENERATE_EPSILON: f64 = 1e-12;
