//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_smaller_than_min_size() {
    assert!(
        EPSILON < MIN_SIZE,
        "a clamped extent must never itself look degenerate"
    );
}

#[test]
fn test_min_radius_not_below_min_size() {
    assert!(MIN_RADIUS >= MIN_SIZE);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_side_range_is_valid() {
    assert!(MIN_SIDES >= 3, "a closed section needs at least 3 sides");
    assert!(MAX_SIDES > MIN_SIDES);
}

#[test]
fn test_sphere_subdivision_range() {
    assert_eq!(SPHERE_MIN_SUBDIVISIONS, 1);
    assert_eq!(SPHERE_MAX_SUBDIVISIONS, 5);
}

#[test]
fn test_stairs_step_limit() {
    assert_eq!(STAIRS_MAX_STEPS, 256);
    assert!(STAIRS_MIN_STEP_HEIGHT > 0.0);
}

#[test]
fn test_arch_side_range() {
    assert!(MIN_ARCH_SIDES >= 1);
    assert!(MAX_ARCH_SIDES > MIN_ARCH_SIDES);
}

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_phi_is_golden_ratio() {
    let expected = (1.0 + 5.0_f64.sqrt()) / 2.0;
    assert!((PHI - expected).abs() < 1e-12);
}

#[test]
fn test_smoothing_groups_distinct() {
    assert!(DEFAULT_SMOOTHING_GROUP > 0);
    assert!(SMOOTHING_GROUP_NONE <= 0);
}

// =============================================================================
// KERNEL CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_is_valid() {
    let cfg = KernelConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert_eq!(cfg.min_size, MIN_SIZE);
}

#[test]
fn test_config_rejects_invalid_values() {
    assert_eq!(
        KernelConfig::new(0.0, 0.1).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        KernelConfig::new(1e-3, -1.0).unwrap_err(),
        ConfigError::InvalidMinSize(-1.0)
    );
    assert!(KernelConfig::new(f64::NAN, 0.1).is_err());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidMinSize(-2.0);
    assert!(err.to_string().contains("min_size"));
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}
