//! Terminal investment growth calculator
//!
//! Interactive front end over `growthcalc_core`: two sliders (principal and
//! duration in months), metric cards for the strategy rates and projected
//! return, an opportunity-cost narrative, and a strategy-vs-baseline line
//! chart with a monthly breakdown. Every input change re-runs the pure
//! projection and series builders synchronously.

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod config;
pub mod logging;

// ============================================================================
// UI modules
// ============================================================================

pub mod components;
pub mod screens;
pub mod state;
pub mod util;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use config::CalculatorConfig;
pub use logging::init_logging;
