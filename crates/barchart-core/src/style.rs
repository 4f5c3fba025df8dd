// File: crates/barchart-core/src/style.rs
// Summary: Immutable render configuration (theme, sizes, fonts, visibility toggles).

use std::str::FromStr;

use crate::error::{ChartError, ChartResult};
use crate::theme::Theme;
use crate::types::{SubplotParams, DPI, FIG_SIZE};

/// Legend anchor inside the axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLoc {
    /// Corner overlapping the fewest bars and value labels.
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendLoc {
    /// Candidate order used by `Best`; earlier wins ties.
    pub const CORNERS: [LegendLoc; 4] =
        [LegendLoc::UpperRight, LegendLoc::UpperLeft, LegendLoc::LowerLeft, LegendLoc::LowerRight];
}

impl FromStr for LegendLoc {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(' ', "-").as_str() {
            "best" => Ok(Self::Best),
            "upper-right" => Ok(Self::UpperRight),
            "upper-left" => Ok(Self::UpperLeft),
            "lower-left" => Ok(Self::LowerLeft),
            "lower-right" => Ok(Self::LowerRight),
            other => Err(ChartError::InvalidStyle(format!("unknown legend location '{other}'"))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub theme: Theme,
    /// Bar width in category units.
    pub bar_width: f64,
    /// Figure size in inches.
    pub fig_size: (f32, f32),
    pub dpi: f32,
    /// Fixed upper bound of the value axis; the lower bound is 0.
    pub y_max: f64,
    /// Font family preference, first available wins.
    pub font_families: Vec<String>,
    /// Body text size in points (ticks, value labels, axis labels, legend).
    pub font_size: f32,
    pub title_size: f32,
    /// Series whose value labels use `theme.highlight`.
    pub highlight_series: Option<usize>,
    pub x_tick_marks: bool,
    pub y_tick_marks: bool,
    pub show_frame: bool,
    pub show_grid: bool,
    pub legend: LegendLoc,
    /// Skip all text; bars, ticks and legend swatches are still drawn.
    pub draw_labels: bool,
    pub subplot: SubplotParams,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            theme: Theme::nvidia(),
            bar_width: 0.3,
            fig_size: FIG_SIZE,
            dpi: DPI,
            y_max: 500.0,
            font_families: ["NVIDIA Corporation", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            font_size: 12.0,
            title_size: 16.0,
            highlight_series: Some(2),
            x_tick_marks: false,
            y_tick_marks: true,
            show_frame: false,
            show_grid: false,
            legend: LegendLoc::Best,
            draw_labels: true,
            subplot: SubplotParams::default(),
        }
    }
}

impl ChartStyle {
    /// Reject sizes that cannot produce an image.
    pub fn validate(&self) -> ChartResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.bar_width) {
            return Err(ChartError::InvalidStyle(format!("bar width must be > 0, got {}", self.bar_width)));
        }
        if !positive(self.y_max) {
            return Err(ChartError::InvalidStyle(format!("y max must be > 0, got {}", self.y_max)));
        }
        if !positive(self.dpi as f64) {
            return Err(ChartError::InvalidStyle(format!("dpi must be > 0, got {}", self.dpi)));
        }
        if !positive(self.fig_size.0 as f64) || !positive(self.fig_size.1 as f64) {
            return Err(ChartError::InvalidStyle(format!(
                "figure size must be > 0, got {}x{}",
                self.fig_size.0, self.fig_size.1
            )));
        }
        if !positive(self.font_size as f64) || !positive(self.title_size as f64) {
            return Err(ChartError::InvalidStyle("font sizes must be > 0".to_string()));
        }
        let sp = &self.subplot;
        if !(0.0..=1.0).contains(&sp.left) || !(0.0..=1.0).contains(&sp.top) || sp.left >= sp.right || sp.bottom >= sp.top || sp.right > 1.0 || sp.bottom < 0.0 {
            return Err(ChartError::InvalidStyle(format!("subplot params out of range: {sp:?}")));
        }
        Ok(())
    }

    /// Points to output pixels.
    pub fn pixel_scale(&self) -> f32 {
        self.dpi / crate::types::POINTS_PER_INCH
    }
}
