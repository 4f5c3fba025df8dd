// File: crates/barchart-core/src/scale.rs
// Summary: Category (X) and Value (Y) scale transforms from data units to points.

/// Logical X coordinate (category index plus bar offset).
pub type Logical = f64;
/// Value Y coordinate (e.g., frames per second).
pub type Value = f64;

/// Horizontal scale mapping `[x_min, x_max]` to `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub x_min: Logical,
    pub x_max: Logical,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, x_min: Logical, x_max: Logical) -> Self {
        let mut s = Self { left_px, right_px, x_min, x_max };
        if (s.x_max - s.x_min).abs() < 1e-12 { s.x_max = s.x_min + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + ((x - self.x_min) / (self.x_max - self.x_min)) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
