//! Tests for input range and step-grid clamping

use crate::bounds::{CalculatorInput, InputBounds, SliderBounds};

#[test]
fn test_duration_clamps_to_range() {
    let bounds = InputBounds::default();

    // Below the 6-month minimum clamps up; above the 60-month maximum
    // clamps down.
    assert_eq!(bounds.clamp_input(25_000.0, 0.0).duration_months, 6);
    assert_eq!(bounds.clamp_input(25_000.0, 3.0).duration_months, 6);
    assert_eq!(bounds.clamp_input(25_000.0, 61.0).duration_months, 60);
    assert_eq!(bounds.clamp_input(25_000.0, 500.0).duration_months, 60);
    assert_eq!(bounds.clamp_input(25_000.0, 24.0).duration_months, 24);
}

#[test]
fn test_principal_snaps_to_step_grid() {
    let bounds = InputBounds::default();

    // Off-grid values round to the nearest $500 step.
    assert_eq!(bounds.clamp_input(25_200.0, 12.0).principal, 25_000.0);
    assert_eq!(bounds.clamp_input(25_250.0, 12.0).principal, 25_500.0);
    assert_eq!(bounds.clamp_input(25_400.0, 12.0).principal, 25_500.0);

    // On-grid values pass through unchanged.
    assert_eq!(bounds.clamp_input(25_000.0, 12.0).principal, 25_000.0);
    assert_eq!(bounds.clamp_input(2_500.0, 12.0).principal, 2_500.0);
    assert_eq!(bounds.clamp_input(1_000_000.0, 12.0).principal, 1_000_000.0);

    // Out-of-range values clamp to the ends.
    assert_eq!(bounds.clamp_input(100.0, 12.0).principal, 2_500.0);
    assert_eq!(bounds.clamp_input(5_000_000.0, 12.0).principal, 1_000_000.0);
}

#[test]
fn test_non_finite_resolves_to_minimum() {
    let bounds = SliderBounds::new(6.0, 60.0, 1.0);
    assert_eq!(bounds.clamp(f64::NAN), 6.0);
    assert_eq!(bounds.clamp(f64::INFINITY), 6.0);
    assert_eq!(bounds.clamp(f64::NEG_INFINITY), 6.0);
}

#[test]
fn test_stepping_saturates_at_ends() {
    let bounds = SliderBounds::new(2_500.0, 1_000_000.0, 500.0);

    assert_eq!(bounds.step_up(25_000.0), 25_500.0);
    assert_eq!(bounds.step_down(25_000.0), 24_500.0);
    assert_eq!(bounds.step_up(1_000_000.0), 1_000_000.0);
    assert_eq!(bounds.step_down(2_500.0), 2_500.0);
}

#[test]
fn test_ratio() {
    let bounds = SliderBounds::new(6.0, 60.0, 1.0);
    assert_eq!(bounds.ratio(6.0), 0.0);
    assert_eq!(bounds.ratio(60.0), 1.0);
    assert!((bounds.ratio(33.0) - 0.5).abs() < 1e-9);

    // Degenerate range does not divide by zero.
    let flat = SliderBounds::new(5.0, 5.0, 1.0);
    assert_eq!(flat.ratio(5.0), 0.0);
}

#[test]
fn test_default_input_is_on_grid() {
    let bounds = InputBounds::default();
    let input = CalculatorInput::default();

    let clamped = bounds.clamp_input(input.principal, input.duration_months as f64);
    assert_eq!(
        clamped, input,
        "the default input must already be valid under the default bounds"
    );
}
