//! Month-by-month comparison series for charting.

use crate::rates::{RateAssumptions, compound_value, linear_value};

/// Display name for the compounded strategy series.
pub const STRATEGY_SERIES_NAME: &str = "Strategy";

/// Display name for the simple-interest baseline series.
pub const BASELINE_SERIES_NAME: &str = "Baseline";

/// One monthly sample of the strategy and baseline curves.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Month index, 0 (start) through the full duration inclusive
    pub month: u32,
    /// Human-readable label: "Start" at month 0, "Month {i}" otherwise
    pub label: String,
    /// Principal compounded at the monthly strategy rate through `month` periods
    pub strategy: f64,
    /// Principal grown linearly at the baseline annual rate through `month` periods
    pub baseline: f64,
}

/// An ordered pair of aligned time series, one point per month.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSeries {
    pub points: Vec<SeriesPoint>,
}

impl ComparisonSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Strategy value at the final month.
    #[must_use]
    pub fn final_strategy_value(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.strategy)
    }

    /// Baseline value at the final month.
    #[must_use]
    pub fn final_baseline_value(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.baseline)
    }

    /// Largest value in either series, used for chart axis scaling.
    ///
    /// Both series are non-decreasing for positive rates, so this is just
    /// the larger of the two final values, but scanning every point keeps
    /// the chart honest if a negative rate is ever configured.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .flat_map(|p| [p.strategy, p.baseline])
            .fold(0.0_f64, f64::max)
    }
}

/// Build the aligned strategy/baseline series for `principal` over
/// `duration_months`.
///
/// Produces exactly `duration_months + 1` points, strictly ordered by month,
/// with month 0 equal to `principal` on both curves. Values come from the
/// same `compound_value` / `linear_value` helpers as the aggregate
/// projection, so the final point always agrees with `growth::project`.
#[must_use]
pub fn comparison_series(
    principal: f64,
    duration_months: u32,
    rates: &RateAssumptions,
) -> ComparisonSeries {
    let points = (0..=duration_months)
        .map(|month| {
            let label = if month == 0 {
                "Start".to_string()
            } else {
                format!("Month {month}")
            };
            SeriesPoint {
                month,
                label,
                strategy: compound_value(principal, rates.monthly_strategy_rate, month),
                baseline: linear_value(principal, rates.baseline_annual_rate, month),
            }
        })
        .collect();

    ComparisonSeries { points }
}
