// File: crates/barchart-core/src/axis.rs
// Summary: Axis model with label and range.

use crate::grid::nice_ticks;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Value axis for frame rates, fixed at `[0, y_max]`.
    pub fn value(label: impl Into<String>, y_max: f64) -> Self {
        Self::new(label, 0.0, y_max)
    }

    /// Major tick values inside the range.
    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, 6)
    }
}
