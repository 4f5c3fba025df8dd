// File: crates/barchart-core/src/geometry.rs
// Summary: Lightweight rectangle helpers for layout math in points.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &RectF) -> RectF {
        RectF {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Grow by `d` on every side.
    pub fn outset(&self, d: f32) -> RectF {
        RectF { left: self.left - d, top: self.top - d, right: self.right + d, bottom: self.bottom + d }
    }

    /// Area of the overlap with `other`; 0 when disjoint.
    pub fn overlap_area(&self, other: &RectF) -> f32 {
        let w = self.right.min(other.right) - self.left.max(other.left);
        let h = self.bottom.min(other.bottom) - self.top.max(other.top);
        if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Union of all rectangles, `None` for an empty iterator.
pub fn bounds_of<'a>(rects: impl IntoIterator<Item = &'a RectF>) -> Option<RectF> {
    rects.into_iter().fold(None, |acc: Option<RectF>, r| match acc {
        Some(a) => Some(a.union(r)),
        None => Some(*r),
    })
}
