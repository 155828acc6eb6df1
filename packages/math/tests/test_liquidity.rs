mod common;

use common::assert_close;
use v3lens_math::liquidity::*;
use v3lens_math::{MathError, PriceRegion, Reserves};

// ============================================================
// PRICE REGION TESTS
// ============================================================

#[test]
fn test_price_region_locate() {
    assert_eq!(PriceRegion::locate(0.5, 1.0, 2.0), PriceRegion::BelowRange);
    assert_eq!(PriceRegion::locate(1.0, 1.0, 2.0), PriceRegion::BelowRange, "lower bound counts as below");
    assert_eq!(PriceRegion::locate(1.5, 1.0, 2.0), PriceRegion::InRange);
    assert_eq!(PriceRegion::locate(2.0, 1.0, 2.0), PriceRegion::AboveRange, "upper bound counts as above");
    assert_eq!(PriceRegion::locate(3.0, 1.0, 2.0), PriceRegion::AboveRange);
}

#[test]
fn test_price_region_held_assets() {
    assert!(PriceRegion::BelowRange.holds_amount0());
    assert!(!PriceRegion::BelowRange.holds_amount1());
    assert!(PriceRegion::InRange.holds_amount0());
    assert!(PriceRegion::InRange.holds_amount1());
    assert!(!PriceRegion::AboveRange.holds_amount0());
    assert!(PriceRegion::AboveRange.holds_amount1());
}

// ============================================================
// LIQUIDITY FROM SINGLE AMOUNT TESTS
// ============================================================

#[test]
fn test_liquidity_for_amount0_basic() {
    // x * sa * sb / (sb - sa) = 1 * 1 * 2 / 1
    let liquidity = liquidity_for_amount0(1.0, 1.0, 2.0).unwrap();
    assert_close(liquidity, 2.0, 1e-15, "liquidity for amount0");
}

#[test]
fn test_liquidity_for_amount1_basic() {
    // y / (sb - sa) = 3 / 1.5
    let liquidity = liquidity_for_amount1(3.0, 0.5, 2.0).unwrap();
    assert_close(liquidity, 2.0, 1e-15, "liquidity for amount1");
}

#[test]
fn test_liquidity_for_amount_zero_amount() {
    assert_eq!(liquidity_for_amount0(0.0, 1.0, 2.0).unwrap(), 0.0, "Zero amount should give zero liquidity");
    assert_eq!(liquidity_for_amount1(0.0, 1.0, 2.0).unwrap(), 0.0, "Zero amount should give zero liquidity");
}

#[test]
fn test_liquidity_for_amount1_proportional() {
    let small = liquidity_for_amount1(1_000.0, 0.5, 1.0).unwrap();
    let large = liquidity_for_amount1(10_000.0, 0.5, 1.0).unwrap();
    assert_close(large, small * 10.0, 1e-12, "liquidity should scale with amount");
}

// ============================================================
// LIQUIDITY FROM BOTH AMOUNTS TESTS
// ============================================================

#[test]
fn test_liquidity_for_amounts_price_below_range() {
    let liquidity = liquidity_for_amounts(1_000_000.0, 1_000_000.0, 0.5, 1.0, 2.0).unwrap();
    let from_0 = liquidity_for_amount0(1_000_000.0, 1.0, 2.0).unwrap();
    assert_eq!(liquidity, from_0, "Should use only amount0 when price below range");
}

#[test]
fn test_liquidity_for_amounts_price_at_lower_bound() {
    let liquidity = liquidity_for_amounts(5.0, 0.0, 1.0, 1.0, 2.0).unwrap();
    let from_0 = liquidity_for_amount0(5.0, 1.0, 2.0).unwrap();
    assert_eq!(liquidity, from_0, "Lower bound behaves as below range");
}

#[test]
fn test_liquidity_for_amounts_price_above_range() {
    let liquidity = liquidity_for_amounts(1_000_000.0, 1_000_000.0, 3.0, 1.0, 2.0).unwrap();
    let from_1 = liquidity_for_amount1(1_000_000.0, 1.0, 2.0).unwrap();
    assert_eq!(liquidity, from_1, "Should use only amount1 when price above range");
}

#[test]
fn test_liquidity_for_amounts_price_in_range_takes_minimum() {
    let (sa, sp, sb) = (0.5, 1.0, 4.0);
    let liquidity = liquidity_for_amounts(1_000.0, 1_000.0, sp, sa, sb).unwrap();

    let liq0 = liquidity_for_amount0(1_000.0, sp, sb).unwrap();
    let liq1 = liquidity_for_amount1(1_000.0, sa, sp).unwrap();
    assert_eq!(liquidity, liq0.min(liq1), "Should use the binding asset");

    // Doubling the non-binding asset changes nothing
    let binding_is_0 = liq0 < liq1;
    let (x, y) = if binding_is_0 { (1_000.0, 2_000.0) } else { (2_000.0, 1_000.0) };
    assert_eq!(liquidity_for_amounts(x, y, sp, sa, sb).unwrap(), liquidity);
}

// ============================================================
// INVALID RANGE TESTS
// ============================================================

#[test]
fn test_degenerate_range_is_invalid_range() {
    let results = [
        liquidity_for_amount0(1.0, 1.5, 1.5),
        liquidity_for_amount1(1.0, 1.5, 1.5),
        liquidity_for_amounts(1.0, 1.0, 1.5, 1.5, 1.5),
        amount0_for_liquidity(1.0, 1.5, 1.5, 1.5),
        amount1_for_liquidity(1.0, 1.5, 1.5, 1.5),
    ];
    for result in results {
        match result {
            Err(err) => assert!(matches!(err, MathError::InvalidRange { .. }), "expected invalid range, got {:?}", err),
            Ok(value) => panic!("degenerate range returned {}", value),
        }
    }
}

#[test]
fn test_inverted_range_is_invalid_range() {
    assert!(matches!(
        liquidity_for_amounts(1.0, 1.0, 1.0, 2.0, 1.0),
        Err(MathError::InvalidRange { lower, upper, .. }) if lower == 2.0 && upper == 1.0
    ));
    assert!(amounts_for_liquidity(1.0, 1.0, 2.0, 1.0).is_err());
}

#[test]
fn test_non_finite_range_is_invalid_range() {
    assert!(check_range(f64::NAN, 1.0).is_err());
    assert!(check_range(1.0, f64::INFINITY).is_err());
    assert!(check_range(-1.0, 1.0).is_err());
    assert!(check_range(0.0, 1.0).is_ok(), "zero lower bound is a valid full range start");
}

#[test]
fn test_zero_sqrt_price_is_invalid_range() {
    // Range starting at zero with the price clamped onto it
    assert_eq!(
        amounts_for_liquidity(1.0, 0.0, 0.0, 1.0),
        Err(MathError::InvalidRange { lower: 0.0, upper: 1.0, reason: "clamped sqrt price is zero" })
    );
    assert!(matches!(
        amounts_after_price_move(1.0, 0.0, 0.0, 0.5, -1.0, 0.0, 1.0),
        Err(MathError::InvalidRange { .. })
    ));
}

#[test]
fn test_nan_price_is_invalid_range() {
    assert!(matches!(
        amount1_for_liquidity(1.0, f64::NAN, 1.0, 2.0),
        Err(MathError::InvalidRange { reason: "sqrt price is not a number", .. })
    ));
}

#[test]
fn test_huge_liquidity_overflows() {
    assert_eq!(
        amount0_for_liquidity(1e308, 1e-10, 1e-10, 1.0),
        Err(MathError::Overflow { context: "amount0 for liquidity" })
    );
    assert_eq!(
        liquidity_for_amount1(1e308, 0.0, 1e-10),
        Err(MathError::Overflow { context: "liquidity for amount1" })
    );
}

#[test]
fn test_nan_price_never_leaks() {
    assert!(amount0_for_liquidity(1.0, f64::NAN, 1.0, 2.0).is_err());
    assert!(amount1_for_liquidity(1.0, f64::NAN, 1.0, 2.0).is_err());
}

// ============================================================
// AMOUNTS FROM LIQUIDITY TESTS
// ============================================================

#[test]
fn test_amounts_for_liquidity_in_range() {
    // L = 100 over [1, 2] at sp = 1.5
    let (amount0, amount1) = amounts_for_liquidity(100.0, 1.5, 1.0, 2.0).unwrap();
    assert_close(amount0, 100.0 * 0.5 / 3.0, 1e-12, "amount0");
    assert_close(amount1, 50.0, 1e-12, "amount1");
}

#[test]
fn test_amounts_for_liquidity_zero() {
    let (amount0, amount1) = amounts_for_liquidity(0.0, 1.5, 1.0, 2.0).unwrap();
    assert_eq!(amount0, 0.0, "Zero liquidity should give zero amount0");
    assert_eq!(amount1, 0.0, "Zero liquidity should give zero amount1");
}

#[test]
fn test_amounts_for_liquidity_boundary_collapse() {
    let (sa, sb, liquidity) = (1.0, 2.0, 1_000.0);
    let x_max = liquidity * (sb - sa) / (sa * sb);
    let y_max = liquidity * (sb - sa);

    let at_lower = amounts_for_liquidity(liquidity, sa, sa, sb).unwrap();
    assert_close(at_lower.0, x_max, 1e-12, "x at lower bound");
    assert_eq!(at_lower.1, 0.0, "y at lower bound");

    let at_upper = amounts_for_liquidity(liquidity, sb, sa, sb).unwrap();
    assert_eq!(at_upper.0, 0.0, "x at upper bound");
    assert_close(at_upper.1, y_max, 1e-12, "y at upper bound");
}

#[test]
fn test_amounts_for_liquidity_clamps_outside_range() {
    let (sa, sb, liquidity) = (1.0, 2.0, 1_000.0);
    assert_eq!(
        amounts_for_liquidity(liquidity, 0.1, sa, sb).unwrap(),
        amounts_for_liquidity(liquidity, sa, sa, sb).unwrap(),
        "Price below range behaves as lower bound"
    );
    assert_eq!(
        amounts_for_liquidity(liquidity, 10.0, sa, sb).unwrap(),
        amounts_for_liquidity(liquidity, sb, sa, sb).unwrap(),
        "Price above range behaves as upper bound"
    );
}

#[test]
fn test_amounts_for_liquidity_monotonic_in_price() {
    let (sa, sb, liquidity) = (1.0, 2.0, 1_000.0);
    let mut previous = amounts_for_liquidity(liquidity, sa, sa, sb).unwrap();
    for step in 1..=10 {
        let sp = sa + (sb - sa) * f64::from(step) / 10.0;
        let current = amounts_for_liquidity(liquidity, sp, sa, sb).unwrap();
        assert!(current.0 < previous.0, "amount0 should fall as price rises");
        assert!(current.1 > previous.1, "amount1 should rise as price rises");
        previous = current;
    }
}

#[test]
fn test_amounts_liquidity_roundtrip() {
    let (sa, sp, sb) = (0.8, 1.1, 1.7);
    let (x, y) = (250.0, 75.0);

    let liquidity = liquidity_for_amounts(x, y, sp, sa, sb).unwrap();
    let (amount0, amount1) = amounts_for_liquidity(liquidity, sp, sa, sb).unwrap();

    // The binding asset is recovered exactly, the other never exceeds its deposit
    assert!(amount0 <= x * (1.0 + 1e-12), "Amount0 should not exceed deposit");
    assert!(amount1 <= y * (1.0 + 1e-12), "Amount1 should not exceed deposit");
    assert!(
        (amount0 - x).abs() <= 1e-9 * x || (amount1 - y).abs() <= 1e-9 * y,
        "One asset should be fully used"
    );
}

// ============================================================
// PRICE MOVE TESTS
// ============================================================

#[test]
fn test_amounts_after_price_move_matches_direct() {
    let (sa, sb) = (1333.33f64.sqrt(), 3000f64.sqrt());
    let sp = 2000f64.sqrt();
    let sp_to = 2500f64.sqrt();
    let liquidity = 487.414;

    let (x, y) = amounts_for_liquidity(liquidity, sp, sa, sb).unwrap();
    let moved = amounts_after_price_move(liquidity, x, y, sp, sp_to, sa, sb).unwrap();
    let direct = amounts_for_liquidity(liquidity, sp_to, sa, sb).unwrap();

    assert_close(moved.0, direct.0, 1e-9, "amount0 after move");
    assert_close(moved.1, direct.1, 1e-9, "amount1 after move");
}

#[test]
fn test_amounts_after_price_move_past_range_end() {
    let (sa, sb, liquidity) = (1.0, 2.0, 100.0);
    let (x, y) = amounts_for_liquidity(liquidity, 1.5, sa, sb).unwrap();

    let moved = amounts_after_price_move(liquidity, x, y, 1.5, 5.0, sa, sb).unwrap();
    assert!(moved.0.abs() < 1e-12, "All of asset0 should be gone above the range");
    assert_close(moved.1, liquidity * (sb - sa), 1e-12, "amount1 at the top of the range");
}

#[test]
fn test_amounts_after_price_move_no_move() {
    let moved = amounts_after_price_move(100.0, 3.0, 4.0, 1.5, 1.5, 1.0, 2.0).unwrap();
    assert_eq!(moved, (3.0, 4.0), "No price change should keep reserves");
}

// ============================================================
// RESERVES TESTS
// ============================================================

#[test]
fn test_reserves_potential_is_one_sided_extremes() {
    let (sa, sb, liquidity) = (1.0, 2.0, 1_000.0);
    let potential = Reserves::potential(liquidity, sa, sb).unwrap();
    assert_close(potential.amount0, liquidity * (sb - sa) / (sa * sb), 1e-12, "potential amount0");
    assert_close(potential.amount1, liquidity * (sb - sa), 1e-12, "potential amount1");
}

#[test]
fn test_reserves_sum_and_sides() {
    let total: Reserves = [Reserves::new(1.0, 2.0), Reserves::new(3.0, 4.0)].into_iter().sum();
    assert_eq!(total, Reserves::new(4.0, 6.0));
    assert_eq!(total.only_amount0(), Reserves::new(4.0, 0.0));
    assert_eq!(total.only_amount1(), Reserves::new(0.0, 6.0));
    assert_eq!(Reserves::default(), Reserves::ZERO);
}
