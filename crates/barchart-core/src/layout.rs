// File: crates/barchart-core/src/layout.rs
// Summary: Pure geometry for grouped bar charts: bar positions, cluster centers,
// tick/label/legend placement and the tight bounding box, all in points.

use crate::axis::Axis;
use crate::chart::ChartText;
use crate::format::format_value_label;
use crate::geometry::{bounds_of, RectF};
use crate::grid::tick_label;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::Series;
use crate::style::{ChartStyle, LegendLoc};
use crate::text::TextMeasure;
use crate::types::{LABEL_PAD, POINTS_PER_INCH, TICK_LENGTH, TICK_PAD, TIGHT_PAD_INCHES, TITLE_PAD, X_MARGIN};

// Legend spacing in units of the font size.
const LEGEND_BORDER_PAD: f32 = 0.4;
const LEGEND_LABEL_SPACING: f32 = 0.5;
const LEGEND_HANDLE_LENGTH: f32 = 2.0;
const LEGEND_HANDLE_HEIGHT: f32 = 0.7;
const LEGEND_HANDLE_TEXT_PAD: f32 = 0.8;
const LEGEND_AXES_PAD: f32 = 0.5;

/// Offset of series `series` from its category base position.
#[inline]
pub fn bar_offset(series: usize, bar_width: f64) -> f64 {
    series as f64 * bar_width
}

/// Data-space x of the center of bar (`category`, `series`).
#[inline]
pub fn bar_center(category: usize, series: usize, bar_width: f64) -> f64 {
    category as f64 + bar_offset(series, bar_width)
}

/// Data-space x of a cluster's visual center, where the category label goes.
#[inline]
pub fn cluster_center(category: usize, series_count: usize, bar_width: f64) -> f64 {
    category as f64 + 0.5 * (series_count.saturating_sub(1)) as f64 * bar_width
}

/// X range covering every bar plus `X_MARGIN` of the span on each side.
pub fn x_data_range(categories: usize, series_count: usize, bar_width: f64) -> (f64, f64) {
    let lo = -0.5 * bar_width;
    let hi = bar_center(categories.saturating_sub(1), series_count.saturating_sub(1), bar_width) + 0.5 * bar_width;
    let m = (hi - lo) * X_MARGIN;
    (lo - m, hi + m)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextBox {
    pub text: String,
    pub size: f32,
    /// Drawn extent; for vertical text this is the rotated extent.
    pub rect: RectF,
}

#[derive(Clone, Debug)]
pub struct BarGeom {
    pub series: usize,
    pub category: usize,
    pub value: f64,
    /// Data-space center x.
    pub center: f64,
    pub rect: RectF,
    pub label: TextBox,
    pub highlight: bool,
}

#[derive(Clone, Debug)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis in points.
    pub pos: f32,
    pub label: TextBox,
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub series: usize,
    pub swatch: RectF,
    pub label: TextBox,
}

#[derive(Clone, Debug)]
pub struct LegendGeom {
    pub loc: LegendLoc,
    pub frame: RectF,
    pub entries: Vec<LegendEntry>,
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub figure: RectF,
    pub axes: RectF,
    pub x_scale: CategoryScale,
    pub y_scale: ValueScale,
    pub bars: Vec<BarGeom>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub title: Option<TextBox>,
    pub x_label: Option<TextBox>,
    pub y_label: Option<TextBox>,
    pub legend: LegendGeom,
    /// Tight bounding box including padding; becomes the output image extent.
    pub bounds: RectF,
}

impl Layout {
    /// Output image size in pixels at `dpi`.
    pub fn pixel_size(&self, dpi: f32) -> (i32, i32) {
        let k = dpi / POINTS_PER_INCH;
        (
            (self.bounds.width() * k).ceil().max(1.0) as i32,
            (self.bounds.height() * k).ceil().max(1.0) as i32,
        )
    }

    /// Data-space x positions of category labels, in category order.
    pub fn cluster_centers(&self) -> Vec<f64> {
        self.x_ticks.iter().map(|t| t.value).collect()
    }

    /// Every text box that gets drawn.
    pub fn text_boxes(&self) -> impl Iterator<Item = &TextBox> {
        self.bars
            .iter()
            .map(|b| &b.label)
            .chain(self.x_ticks.iter().map(|t| &t.label))
            .chain(self.y_ticks.iter().map(|t| &t.label))
            .chain(self.legend.entries.iter().map(|e| &e.label))
            .chain(self.title.iter())
            .chain(self.x_label.iter())
            .chain(self.y_label.iter())
    }
}

fn text_box(measure: &dyn TextMeasure, text: &str, size: f32, rect_of: impl FnOnce(f32, f32) -> RectF) -> TextBox {
    let (w, h) = measure.measure(text, size);
    TextBox { text: text.to_string(), size, rect: rect_of(w, h) }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Compute the full layout. Inputs are assumed validated.
pub fn compute(
    series: &[Series],
    categories: &[String],
    text: &ChartText,
    style: &ChartStyle,
    measure: &dyn TextMeasure,
) -> Layout {
    let fs = style.font_size;
    let fig_w = style.fig_size.0 * POINTS_PER_INCH;
    let fig_h = style.fig_size.1 * POINTS_PER_INCH;
    let figure = RectF::from_ltwh(0.0, 0.0, fig_w, fig_h);
    let sp = &style.subplot;
    let axes = RectF::from_ltrb(sp.left * fig_w, (1.0 - sp.top) * fig_h, sp.right * fig_w, (1.0 - sp.bottom) * fig_h);

    let series_count = series.len();
    let (x_min, x_max) = x_data_range(categories.len(), series_count, style.bar_width);
    let x_scale = CategoryScale::new(axes.left, axes.right, x_min, x_max);
    let y_axis = Axis::value(&text.y_label, style.y_max);
    let y_scale = ValueScale::new_linear(axes.top, axes.bottom, y_axis.min, y_axis.max);

    // Bars and value labels
    let half = style.bar_width * 0.5;
    let zero_px = y_scale.to_px(0.0);
    let mut bars = Vec::with_capacity(series_count * categories.len());
    for (si, s) in series.iter().enumerate() {
        for (ci, &value) in s.values.iter().enumerate() {
            let center = bar_center(ci, si, style.bar_width);
            let top_px = y_scale.to_px(value);
            let rect = RectF::from_ltrb(
                x_scale.to_px(center - half),
                top_px.min(zero_px),
                x_scale.to_px(center + half),
                top_px.max(zero_px),
            );
            let cx = x_scale.to_px(center);
            let label = text_box(measure, &format_value_label(value), fs, |w, h| {
                RectF::from_ltrb(cx - w * 0.5, top_px - h, cx + w * 0.5, top_px)
            });
            bars.push(BarGeom {
                series: si,
                category: ci,
                value,
                center,
                rect,
                label,
                highlight: style.highlight_series == Some(si),
            });
        }
    }

    // Category labels under the cluster centers
    let x_off = (if style.x_tick_marks { TICK_LENGTH } else { 0.0 }) + TICK_PAD;
    let x_ticks: Vec<Tick> = categories
        .iter()
        .enumerate()
        .map(|(ci, name)| {
            let value = cluster_center(ci, series_count, style.bar_width);
            let pos = x_scale.to_px(value);
            let label = text_box(measure, name, fs, |w, h| {
                RectF::from_ltwh(pos - w * 0.5, axes.bottom + x_off, w, h)
            });
            Tick { value, pos, label }
        })
        .collect();

    // Value ticks, right-aligned left of the axes
    let y_off = (if style.y_tick_marks { TICK_LENGTH } else { 0.0 }) + TICK_PAD;
    let y_ticks: Vec<Tick> = y_axis
        .ticks()
        .into_iter()
        .map(|value| {
            let pos = y_scale.to_px(value);
            let label = text_box(measure, &tick_label(value), fs, |w, h| {
                RectF::from_ltrb(axes.left - y_off - w, pos - h * 0.5, axes.left - y_off, pos + h * 0.5)
            });
            Tick { value, pos, label }
        })
        .collect();

    let title = non_empty(&text.title).map(|t| {
        text_box(measure, t, style.title_size, |w, h| {
            RectF::from_ltrb(axes.center_x() - w * 0.5, axes.top - TITLE_PAD - h, axes.center_x() + w * 0.5, axes.top - TITLE_PAD)
        })
    });

    let ticks_bottom = x_ticks.iter().map(|t| t.label.rect.bottom).fold(axes.bottom + x_off, f32::max);
    let x_label = non_empty(&text.x_label).map(|t| {
        text_box(measure, t, fs, |w, h| RectF::from_ltwh(axes.center_x() - w * 0.5, ticks_bottom + LABEL_PAD, w, h))
    });

    let ticks_left = y_ticks.iter().map(|t| t.label.rect.left).fold(axes.left - y_off, f32::min);
    let y_label = non_empty(&text.y_label).map(|t| {
        let cy = (axes.top + axes.bottom) * 0.5;
        // rotated: on-screen width is the text height
        text_box(measure, t, fs, |w, h| {
            RectF::from_ltrb(ticks_left - LABEL_PAD - h, cy - w * 0.5, ticks_left - LABEL_PAD, cy + w * 0.5)
        })
    });

    let legend = legend_layout(series, &axes, &bars, style, measure);

    let mut parts = vec![axes, legend.frame];
    if style.draw_labels {
        parts.extend(bars.iter().map(|b| b.label.rect));
        parts.extend(x_ticks.iter().chain(y_ticks.iter()).map(|t| t.label.rect));
        parts.extend([&title, &x_label, &y_label].into_iter().flatten().map(|t| t.rect));
    }
    let bounds = bounds_of(&parts).unwrap_or(figure).outset(TIGHT_PAD_INCHES * POINTS_PER_INCH);

    Layout { figure, axes, x_scale, y_scale, bars, x_ticks, y_ticks, title, x_label, y_label, legend, bounds }
}

fn legend_layout(series: &[Series], axes: &RectF, bars: &[BarGeom], style: &ChartStyle, measure: &dyn TextMeasure) -> LegendGeom {
    let fs = style.font_size;
    let pad = LEGEND_BORDER_PAD * fs;
    let handle_w = LEGEND_HANDLE_LENGTH * fs;
    let handle_h = LEGEND_HANDLE_HEIGHT * fs;
    let text_gap = LEGEND_HANDLE_TEXT_PAD * fs;
    let spacing = LEGEND_LABEL_SPACING * fs;

    let sizes: Vec<(f32, f32)> = series.iter().map(|s| measure.measure(&s.name, fs)).collect();
    let row_h = sizes.iter().map(|&(_, h)| h).fold(handle_h, f32::max);
    let text_w = sizes.iter().map(|&(w, _)| w).fold(0.0, f32::max);
    let n = series.len() as f32;
    let w = 2.0 * pad + handle_w + text_gap + text_w;
    let h = 2.0 * pad + n * row_h + (n - 1.0).max(0.0) * spacing;

    let frame_at = |loc: LegendLoc| -> RectF {
        let inset = LEGEND_AXES_PAD * fs;
        let (left, top) = match loc {
            LegendLoc::UpperLeft => (axes.left + inset, axes.top + inset),
            LegendLoc::LowerLeft => (axes.left + inset, axes.bottom - inset - h),
            LegendLoc::LowerRight => (axes.right - inset - w, axes.bottom - inset - h),
            LegendLoc::UpperRight | LegendLoc::Best => (axes.right - inset - w, axes.top + inset),
        };
        RectF::from_ltwh(left, top, w, h)
    };

    let loc = match style.legend {
        LegendLoc::Best => {
            let overlap = |r: &RectF| -> f32 {
                bars.iter().map(|b| r.overlap_area(&b.rect) + r.overlap_area(&b.label.rect)).sum()
            };
            let mut best = LegendLoc::CORNERS[0];
            let mut best_cost = f32::INFINITY;
            for loc in LegendLoc::CORNERS {
                let cost = overlap(&frame_at(loc));
                if cost < best_cost {
                    best = loc;
                    best_cost = cost;
                }
            }
            best
        }
        fixed => fixed,
    };
    let frame = frame_at(loc);

    let entries = series
        .iter()
        .zip(&sizes)
        .enumerate()
        .map(|(i, (s, &(tw, th)))| {
            let row_top = frame.top + pad + i as f32 * (row_h + spacing);
            let swatch = RectF::from_ltwh(frame.left + pad, row_top + (row_h - handle_h) * 0.5, handle_w, handle_h);
            let label = TextBox {
                text: s.name.clone(),
                size: fs,
                rect: RectF::from_ltwh(swatch.right + text_gap, row_top + (row_h - th) * 0.5, tw, th),
            };
            LegendEntry { series: i, swatch, label }
        })
        .collect();

    LegendGeom { loc, frame, entries }
}
