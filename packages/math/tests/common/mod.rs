#![allow(dead_code)]

use v3lens_math::relative_eq;

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
