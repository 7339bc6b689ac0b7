//! Aggregate growth projection: total return and opportunity cost.

use crate::rates::{RateAssumptions, compound_value, linear_value};

/// Output of a single projection.
///
/// Recomputed from scratch on every call; it carries no identity or
/// lifecycle beyond the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthProjection {
    /// Monthly strategy rate as a percentage (input-independent)
    pub monthly_rate_pct: f64,
    /// Annual-equivalent of the monthly rate as a percentage (input-independent)
    pub annualized_rate_pct: f64,
    /// Principal compounded monthly over the full duration
    pub total_value: f64,
    /// `total_value` minus the principal
    pub total_return: f64,
    /// Simple-interest return at the baseline annual rate over the same duration
    pub baseline_return: f64,
    /// `total_return` minus `baseline_return`
    pub opportunity_cost: f64,
}

/// Project `principal` over `duration_months` at the given rate assumptions.
///
/// Pure arithmetic over trusted inputs: the bounds layer clamps values into
/// range before anything reaches this function, so no validation happens
/// here (non-positive inputs produce unspecified output, not an error).
#[must_use]
pub fn project(principal: f64, duration_months: u32, rates: &RateAssumptions) -> GrowthProjection {
    let total_value = compound_value(principal, rates.monthly_strategy_rate, duration_months);
    let total_return = total_value - principal;

    // Simple interest by design: the baseline models a conventional account
    // whose payout is not reinvested.
    let baseline_return =
        linear_value(principal, rates.baseline_annual_rate, duration_months) - principal;

    GrowthProjection {
        monthly_rate_pct: rates.monthly_rate_pct(),
        annualized_rate_pct: rates.annualized_rate_pct(),
        total_value,
        total_return,
        baseline_return,
        opportunity_cost: total_return - baseline_return,
    }
}
