//! Range and step-grid clamping for the calculator inputs.
//!
//! The projection functions trust their inputs; this layer is what earns
//! that trust. Every raw value from the UI, the CLI, or the config file
//! passes through here before it reaches `growth` or `series`.

use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` range with a fixed step grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Snap `value` to the nearest step multiple measured from `min`, then
    /// clamp into `[min, max]`. Values already on the grid pass through
    /// unchanged; non-finite input resolves to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// One grid step up, saturating at `max`.
    #[must_use]
    pub fn step_up(&self, value: f64) -> f64 {
        self.clamp(value + self.step)
    }

    /// One grid step down, saturating at `min`.
    #[must_use]
    pub fn step_down(&self, value: f64) -> f64 {
        self.clamp(value - self.step)
    }

    /// Position of `value` within the range: 0.0 at `min`, 1.0 at `max`.
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Bounds for both calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    #[serde(default = "default_principal_bounds")]
    pub principal: SliderBounds,
    #[serde(default = "default_duration_bounds")]
    pub duration: SliderBounds,
}

fn default_principal_bounds() -> SliderBounds {
    SliderBounds::new(2_500.0, 1_000_000.0, 500.0)
}

fn default_duration_bounds() -> SliderBounds {
    SliderBounds::new(6.0, 60.0, 1.0)
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            principal: default_principal_bounds(),
            duration: default_duration_bounds(),
        }
    }
}

impl InputBounds {
    /// Produce a valid `CalculatorInput` from arbitrary raw numbers.
    #[must_use]
    pub fn clamp_input(&self, principal: f64, duration_months: f64) -> CalculatorInput {
        CalculatorInput {
            principal: self.principal.clamp(principal),
            duration_months: self.duration.clamp(duration_months) as u32,
        }
    }
}

/// A clamped pair of calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Amount of capital, on the principal step grid
    pub principal: f64,
    /// Number of months to project
    pub duration_months: u32,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            principal: 25_000.0,
            duration_months: 12,
        }
    }
}
