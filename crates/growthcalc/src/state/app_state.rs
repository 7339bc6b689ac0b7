use std::path::PathBuf;

use growthcalc_core::{
    CalculatorInput, ComparisonSeries, GrowthProjection, comparison_series, project,
};

use crate::config::CalculatorConfig;
use crate::state::TabId;

/// Which slider currently has focus on the calculator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderField {
    Principal,
    Duration,
}

impl SliderField {
    pub fn next(self) -> Self {
        match self {
            SliderField::Principal => SliderField::Duration,
            SliderField::Duration => SliderField::Principal,
        }
    }
}

#[derive(Debug)]
pub struct CalculatorState {
    pub focused_field: SliderField,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            focused_field: SliderField::Principal,
        }
    }
}

#[derive(Debug, Default)]
pub struct ChartState {
    pub scroll_offset: usize,
}

/// Top-level application state.
///
/// The projection and series are plain derived values: both are rebuilt
/// whole from the clamped input on every change, and nothing is cached
/// between recomputes.
pub struct AppState {
    pub active_tab: TabId,
    pub config: CalculatorConfig,
    pub input: CalculatorInput,
    pub projection: GrowthProjection,
    pub series: ComparisonSeries,
    pub calculator_state: CalculatorState,
    pub chart_state: ChartState,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl AppState {
    pub fn new(config: CalculatorConfig) -> Self {
        let input = config.default_input();
        let projection = project(input.principal, input.duration_months, &config.rates);
        let series = comparison_series(input.principal, input.duration_months, &config.rates);

        Self {
            active_tab: TabId::Calculator,
            config,
            input,
            projection,
            series,
            calculator_state: CalculatorState::default(),
            chart_state: ChartState::default(),
            error_message: None,
            status_message: None,
            data_dir: None,
            exit: false,
        }
    }

    /// Re-run both pure computations from the current input.
    fn recompute(&mut self) {
        self.projection = project(
            self.input.principal,
            self.input.duration_months,
            &self.config.rates,
        );
        self.series = comparison_series(
            self.input.principal,
            self.input.duration_months,
            &self.config.rates,
        );
        // The series just shrank or grew; keep the breakdown scroll in range.
        self.chart_state.scroll_offset = self
            .chart_state
            .scroll_offset
            .min(self.series.len().saturating_sub(1));
    }

    /// Clamp raw values onto the configured grid and recompute.
    pub fn set_raw_input(&mut self, principal: f64, duration_months: f64) {
        self.input = self.config.bounds.clamp_input(principal, duration_months);
        self.recompute();
    }

    /// Move the principal slider by `steps` grid steps (negative = down).
    pub fn adjust_principal(&mut self, steps: i32) {
        let bounds = self.config.bounds.principal;
        self.input.principal = bounds.clamp(self.input.principal + f64::from(steps) * bounds.step);
        self.recompute();
    }

    /// Move the duration slider by `steps` grid steps (negative = down).
    pub fn adjust_duration(&mut self, steps: i32) {
        let bounds = self.config.bounds.duration;
        let raw = self.input.duration_months as f64 + f64::from(steps) * bounds.step;
        self.input.duration_months = bounds.clamp(raw) as u32;
        self.recompute();
    }

    /// Move whichever slider has focus.
    pub fn adjust_focused(&mut self, steps: i32) {
        match self.calculator_state.focused_field {
            SliderField::Principal => self.adjust_principal(steps),
            SliderField::Duration => self.adjust_duration(steps),
        }
    }

    pub fn reset_to_defaults(&mut self) {
        self.input = self.config.default_input();
        self.recompute();
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.status_message = None;
        self.error_message = Some(message);
    }

    pub fn set_status(&mut self, message: String) {
        self.error_message = None;
        self.status_message = Some(message);
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.status_message = None;
    }
}
