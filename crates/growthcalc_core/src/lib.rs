//! Investment growth projection library
//!
//! This crate provides the pure computation behind the growth calculator:
//! - A compound-growth projection at a fixed monthly strategy rate
//! - A simple-interest baseline at a fixed annual rate for comparison
//! - The "opportunity cost" delta between the two
//! - A month-by-month comparison series for charting
//! - Range/step clamping for the slider inputs
//!
//! Everything here is synchronous and deterministic: the same inputs always
//! produce the same outputs, and nothing is cached between calls.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod bounds;
pub mod growth;
pub mod rates;
pub mod series;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use bounds::{CalculatorInput, InputBounds, SliderBounds};
pub use growth::{GrowthProjection, project};
pub use rates::{
    BASELINE_ANNUAL_RATE, MONTHLY_STRATEGY_RATE, RateAssumptions, compound_value, linear_value,
};
pub use series::{
    BASELINE_SERIES_NAME, ComparisonSeries, STRATEGY_SERIES_NAME, SeriesPoint, comparison_series,
};
