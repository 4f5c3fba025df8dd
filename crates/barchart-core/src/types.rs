// File: crates/barchart-core/src/types.rs
// Summary: Shared constants (figure sizes, resolution, matplotlib-like spacing in points).

/// Points per inch; all layout happens in points and is scaled by `dpi / POINTS_PER_INCH`.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default output resolution.
pub const DPI: f32 = 300.0;

/// Default figure size in inches (width, height).
pub const FIG_SIZE: (f32, f32) = (10.0, 6.0);

/// Padding added around the tight bounding box, in inches.
pub const TIGHT_PAD_INCHES: f32 = 0.1;

/// Fraction of the data span added on each side of the x range.
pub const X_MARGIN: f64 = 0.05;

/// Tick mark length and label gap, in points.
pub const TICK_LENGTH: f32 = 3.5;
pub const TICK_PAD: f32 = 3.5;
/// Gap between the axes and the title, in points.
pub const TITLE_PAD: f32 = 6.0;
/// Gap between tick labels and an axis label, in points.
pub const LABEL_PAD: f32 = 4.0;

/// Axes position as fractions of the figure.
/// Contract: left < right and bottom < top, all within [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl SubplotParams {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.11, 0.88)
    }
}
