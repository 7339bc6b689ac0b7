//! Fixed rate assumptions shared by the projection and series paths.

use serde::{Deserialize, Serialize};

/// Fixed monthly growth rate assumed for the strategy (1.76% per month).
pub const MONTHLY_STRATEGY_RATE: f64 = 0.0176;

/// Fixed annual rate for the traditional comparison investment (4%).
///
/// The baseline accrues linearly (simple interest), never compounded. The
/// asymmetry against the compounded strategy rate is intentional.
pub const BASELINE_ANNUAL_RATE: f64 = 0.04;

/// Rate assumptions for a projection.
///
/// Defaults to the fixed strategy/baseline constants. The config layer can
/// override both from YAML, so nothing downstream hard-wires the constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateAssumptions {
    /// Monthly strategy rate as a decimal (0.0176 = 1.76% per month)
    #[serde(default = "default_monthly_strategy_rate")]
    pub monthly_strategy_rate: f64,

    /// Annual baseline rate as a decimal, accrued as simple interest
    #[serde(default = "default_baseline_annual_rate")]
    pub baseline_annual_rate: f64,
}

fn default_monthly_strategy_rate() -> f64 {
    MONTHLY_STRATEGY_RATE
}

fn default_baseline_annual_rate() -> f64 {
    BASELINE_ANNUAL_RATE
}

impl Default for RateAssumptions {
    fn default() -> Self {
        Self {
            monthly_strategy_rate: MONTHLY_STRATEGY_RATE,
            baseline_annual_rate: BASELINE_ANNUAL_RATE,
        }
    }
}

impl RateAssumptions {
    /// The monthly strategy rate expressed as a percentage.
    #[must_use]
    pub fn monthly_rate_pct(&self) -> f64 {
        self.monthly_strategy_rate * 100.0
    }

    /// What the monthly strategy rate annualizes to, as a percentage.
    ///
    /// Derived only from the monthly rate (compounded over 12 periods); it
    /// describes the rate itself, not any particular projection, so it is
    /// independent of the chosen duration.
    #[must_use]
    pub fn annualized_rate_pct(&self) -> f64 {
        ((1.0 + self.monthly_strategy_rate).powi(12) - 1.0) * 100.0
    }
}

/// Compound `principal` at `rate` per period over `periods` periods.
///
/// Single source of truth for the strategy growth curve: both the aggregate
/// projection and the chart series derive their values from this.
#[must_use]
pub fn compound_value(principal: f64, rate: f64, periods: u32) -> f64 {
    principal * (1.0 + rate).powi(periods as i32)
}

/// Grow `principal` linearly at `annual_rate`, pro-rated per month.
///
/// Simple interest: `principal * (1 + (annual/12) * months)`.
#[must_use]
pub fn linear_value(principal: f64, annual_rate: f64, months: u32) -> f64 {
    principal * (1.0 + (annual_rate / 12.0) * months as f64)
}
