//! Tests for config persistence and CSV export

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::tempdir;

use crate::components::Component;
use crate::config::CalculatorConfig;
use crate::screens::chart::ChartScreen;
use crate::state::AppState;

#[test]
fn test_config_round_trip() {
    let dir = tempdir().unwrap();
    let path = CalculatorConfig::config_path(dir.path());

    let mut config = CalculatorConfig::default();
    config.rates.monthly_strategy_rate = 0.02;
    config.defaults.principal = 50_000.0;

    config.save(&path).unwrap();
    let loaded = CalculatorConfig::load(&path).unwrap();

    assert_eq!(loaded.rates.monthly_strategy_rate, 0.02);
    assert_eq!(loaded.rates.baseline_annual_rate, 0.04);
    assert_eq!(loaded.defaults.principal, 50_000.0);
    assert_eq!(loaded.bounds.principal.step, 500.0);
}

#[test]
fn test_load_or_init_writes_defaults_on_first_run() {
    let dir = tempdir().unwrap();
    let path = CalculatorConfig::config_path(dir.path());

    assert!(!path.exists());
    let config = CalculatorConfig::load_or_init(dir.path());
    assert!(path.exists(), "first run should write config.yaml back");
    assert_eq!(config.defaults.principal, 25_000.0);

    // Second run reads the file it just wrote.
    let reloaded = CalculatorConfig::load_or_init(dir.path());
    assert_eq!(reloaded.defaults.principal, config.defaults.principal);
}

#[test]
fn test_load_or_init_survives_garbage_file() {
    let dir = tempdir().unwrap();
    let path = CalculatorConfig::config_path(dir.path());
    std::fs::write(&path, ":[ not yaml at all ]{").unwrap();

    let config = CalculatorConfig::load_or_init(dir.path());
    assert_eq!(
        config.defaults.principal, 25_000.0,
        "unparseable config should fall back to defaults"
    );
}

/// Defaults stored off-grid in the file are snapped before first use.
#[test]
fn test_config_defaults_are_clamped() {
    let mut config = CalculatorConfig::default();
    config.defaults.principal = 25_123.0;
    config.defaults.duration_months = 3;

    let input = config.default_input();
    assert_eq!(input.principal, 25_000.0);
    assert_eq!(input.duration_months, 6);
}

#[test]
fn test_csv_export_via_chart_screen() {
    let dir = tempdir().unwrap();
    let mut state = AppState::new(CalculatorConfig::default());
    state.data_dir = Some(dir.path().to_path_buf());

    let mut screen = ChartScreen::new();
    let result = screen.handle_key(
        KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
        &mut state,
    );
    assert_eq!(result, crate::components::EventResult::Handled);
    assert!(state.status_message.is_some(), "export should report success");

    let csv = std::fs::read_to_string(dir.path().join("projection.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "month,label,strategy,baseline");
    assert_eq!(
        lines.len(),
        1 + state.series.len(),
        "one header plus one row per point"
    );
    assert!(lines[1].starts_with("0,Start,25000.00,25000.00"));
}
