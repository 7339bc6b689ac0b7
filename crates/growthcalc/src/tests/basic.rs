//! Tests for app state wiring
//!
//! These tests verify that:
//! - The initial state is derived from the configured defaults
//! - Slider adjustments clamp to the grid and trigger a full recompute
//! - Raw (CLI-provided) inputs are clamped before first use
//! - The chart scroll offset stays in range when the series shrinks

use crate::config::CalculatorConfig;
use crate::state::{AppState, SliderField};

#[test]
fn test_initial_state_matches_defaults() {
    let state = AppState::new(CalculatorConfig::default());

    assert_eq!(state.input.principal, 25_000.0);
    assert_eq!(state.input.duration_months, 12);
    assert_eq!(state.series.len(), 13, "12 months should chart 13 points");
    assert!(
        (state.series.final_strategy_value() - state.projection.total_value).abs() < 1e-6,
        "series and projection must agree at the final month"
    );
}

#[test]
fn test_adjust_principal_recomputes() {
    let mut state = AppState::new(CalculatorConfig::default());
    let before = state.projection;

    state.adjust_principal(1);

    assert_eq!(state.input.principal, 25_500.0);
    assert!(
        state.projection.total_return > before.total_return,
        "more principal must increase the projected return"
    );
    assert!(
        (state.series.points[0].strategy - 25_500.0).abs() < 1e-9,
        "series must restart from the new principal"
    );
}

#[test]
fn test_adjust_duration_saturates() {
    let mut state = AppState::new(CalculatorConfig::default());

    state.adjust_duration(1_000);
    assert_eq!(state.input.duration_months, 60);
    assert_eq!(state.series.len(), 61);

    state.adjust_duration(-1_000);
    assert_eq!(state.input.duration_months, 6);
    assert_eq!(state.series.len(), 7);
}

#[test]
fn test_adjust_focused_targets_active_slider() {
    let mut state = AppState::new(CalculatorConfig::default());

    state.calculator_state.focused_field = SliderField::Duration;
    state.adjust_focused(1);
    assert_eq!(state.input.duration_months, 13);
    assert_eq!(state.input.principal, 25_000.0);

    state.calculator_state.focused_field = state.calculator_state.focused_field.next();
    state.adjust_focused(-1);
    assert_eq!(state.input.principal, 24_500.0);
    assert_eq!(state.input.duration_months, 13);
}

/// CLI seed values go through the same clamping as everything else.
#[test]
fn test_raw_input_is_clamped() {
    let mut state = AppState::new(CalculatorConfig::default());

    state.set_raw_input(100.0, 0.0);
    assert_eq!(state.input.principal, 2_500.0);
    assert_eq!(state.input.duration_months, 6);

    state.set_raw_input(25_333.0, 72.0);
    assert_eq!(state.input.principal, 25_500.0);
    assert_eq!(state.input.duration_months, 60);
}

#[test]
fn test_scroll_offset_clamped_when_series_shrinks() {
    let mut state = AppState::new(CalculatorConfig::default());

    state.set_raw_input(25_000.0, 60.0);
    state.chart_state.scroll_offset = 55;

    state.set_raw_input(25_000.0, 6.0);
    assert!(
        state.chart_state.scroll_offset < state.series.len(),
        "scroll offset must stay within the shrunk series"
    );
}

#[test]
fn test_reset_to_defaults() {
    let mut state = AppState::new(CalculatorConfig::default());

    state.set_raw_input(500_000.0, 48.0);
    state.reset_to_defaults();

    assert_eq!(state.input.principal, 25_000.0);
    assert_eq!(state.input.duration_months, 12);
}

#[test]
fn test_messages_replace_each_other() {
    let mut state = AppState::new(CalculatorConfig::default());

    state.set_status("exported".to_string());
    assert!(state.status_message.is_some());

    state.set_error("boom".to_string());
    assert!(state.error_message.is_some());
    assert!(state.status_message.is_none(), "error displaces status");

    state.clear_messages();
    assert!(state.error_message.is_none());
}
