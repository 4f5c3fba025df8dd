// File: crates/barchart-core/src/chart.rs
// Summary: BarChart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{ChartError, ChartResult};
use crate::layout::{self, Layout};
use crate::series::{validate_dataset, zip_series, Series};
use crate::style::ChartStyle;
use crate::text::{EstimatedMeasure, TextMeasure, TextShaper};
use crate::theme::Theme;
use crate::types::TICK_LENGTH;

/// Title and axis labels; empty strings are not drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartText {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartText {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { title: title.into(), x_label: x_label.into(), y_label: y_label.into() }
    }
}

/// A validated grouped bar chart: every series has one value per category.
#[derive(Clone, Debug)]
pub struct BarChart {
    series: Vec<Series>,
    categories: Vec<String>,
    pub text: ChartText,
}

impl BarChart {
    pub fn new(series: Vec<Series>, categories: Vec<String>) -> ChartResult<Self> {
        validate_dataset(&series, &categories)?;
        debug!(series = series.len(), categories = categories.len(), "validated bar chart dataset");
        Ok(Self { series, categories, text: ChartText::default() })
    }

    /// Build from parallel arrays: `data[i]` is the series named `names[i]`.
    pub fn from_parts(data: Vec<Vec<f64>>, names: Vec<String>, labels: Vec<String>) -> ChartResult<Self> {
        Self::new(zip_series(data, names)?, labels)
    }

    pub fn with_text(mut self, text: ChartText) -> Self {
        self.text = text;
        self
    }

    pub fn series(&self) -> &[Series] { &self.series }

    pub fn categories(&self) -> &[String] { &self.categories }

    /// Style checks that depend on this dataset; run before anything is drawn.
    pub fn check_style(&self, style: &ChartStyle) -> ChartResult<()> {
        style.validate()?;
        if self.series.len() > style.theme.palette.len() {
            return Err(ChartError::PaletteExhausted {
                series: self.series.len(),
                palette: style.theme.palette.len(),
            });
        }
        Ok(())
    }

    /// Geometry of every drawn element, in points.
    pub fn layout(&self, style: &ChartStyle, measure: &dyn TextMeasure) -> ChartResult<Layout> {
        self.check_style(style)?;
        Ok(layout::compute(&self.series, &self.categories, &self.text, style, measure))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    /// The parent directory must already exist.
    pub fn render_to_png(&self, style: &ChartStyle, output_png_path: impl AsRef<Path>) -> ChartResult<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(style)?;
        std::fs::write(path, &bytes).map_err(|source| ChartError::OutputWrite { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote chart png");
        Ok(())
    }

    /// Encode the chart as PNG bytes.
    pub fn render_to_png_bytes(&self, style: &ChartStyle) -> ChartResult<Vec<u8>> {
        let mut surface = self.render_surface(style)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Raw RGBA8 pixels: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, style: &ChartStyle) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(style)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Surface { width: w, height: h });
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, style: &ChartStyle) -> ChartResult<skia::Surface> {
        self.check_style(style)?;
        let shaper = TextShaper::new(&style.font_families);
        // text sizes from real fonts only when text is drawn, so text-free renders are host independent
        let measure: &dyn TextMeasure = if style.draw_labels { &shaper } else { &EstimatedMeasure };
        let layout = layout::compute(&self.series, &self.categories, &self.text, style, measure);

        let (width, height) = layout.pixel_size(style.dpi);
        debug!(width, height, legend = ?layout.legend.loc, "computed chart layout");
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(style.theme.background);

        // Layout is in points; crop to the tight box
        let k = style.pixel_scale();
        canvas.scale((k, k));
        canvas.translate((-layout.bounds.left, -layout.bounds.top));

        draw_axes_face(canvas, &layout, &style.theme);
        if style.show_grid {
            draw_grid(canvas, &layout, &style.theme);
        }
        draw_bars(canvas, &layout, &style.theme);
        draw_frame_and_ticks(canvas, &layout, style);
        draw_legend(canvas, &layout, style, &shaper);
        if style.draw_labels {
            draw_text(canvas, &layout, style, &shaper);
        }

        Ok(surface)
    }
}

/// Validate, render and write one PNG in a single call.
pub fn render_bar_chart(
    data: Vec<Vec<f64>>,
    series_names: Vec<String>,
    category_labels: Vec<String>,
    style: &ChartStyle,
    text: ChartText,
    output_png_path: impl AsRef<Path>,
) -> ChartResult<()> {
    BarChart::from_parts(data, series_names, category_labels)?
        .with_text(text)
        .render_to_png(style, output_png_path)
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_axes_face(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    canvas.draw_rect(layout.axes.to_skia(), &fill_paint(theme.axes_face));
}

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let mut paint = stroke_paint(theme.grid, 0.8);
    paint.set_path_effect(skia::PathEffect::dash(&[3.7, 1.6], 0.0));
    let (l, r) = (layout.axes.left, layout.axes.right);
    for t in &layout.y_ticks {
        canvas.draw_line((l, t.pos), (r, t.pos), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    canvas.save();
    canvas.clip_rect(layout.axes.to_skia(), skia::ClipOp::Intersect, true);
    let edge = stroke_paint(theme.bar_edge, 1.0);
    for bar in &layout.bars {
        let rect = bar.rect.to_skia();
        canvas.draw_rect(rect, &fill_paint(theme.palette[bar.series]));
        canvas.draw_rect(rect, &edge);
    }
    canvas.restore();
}

fn draw_frame_and_ticks(canvas: &skia::Canvas, layout: &Layout, style: &ChartStyle) {
    let axes = &layout.axes;
    if style.show_frame {
        canvas.draw_rect(axes.to_skia(), &stroke_paint(style.theme.axes_edge, 0.8));
    }
    let tick = stroke_paint(style.theme.tick, 0.8);
    if style.y_tick_marks {
        for t in &layout.y_ticks {
            canvas.draw_line((axes.left - TICK_LENGTH, t.pos), (axes.left, t.pos), &tick);
        }
    }
    if style.x_tick_marks {
        for t in &layout.x_ticks {
            canvas.draw_line((t.pos, axes.bottom), (t.pos, axes.bottom + TICK_LENGTH), &tick);
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, layout: &Layout, style: &ChartStyle, shaper: &TextShaper) {
    let theme = &style.theme;
    let legend = &layout.legend;
    let radius = 0.2 * style.font_size;
    let frame = skia::RRect::new_rect_xy(legend.frame.to_skia(), radius, radius);
    canvas.draw_rrect(&frame, &fill_paint(theme.legend_face));
    canvas.draw_rrect(&frame, &stroke_paint(theme.legend_edge, 0.8));

    let edge = stroke_paint(theme.bar_edge, 1.0);
    for entry in &legend.entries {
        let swatch = entry.swatch.to_skia();
        canvas.draw_rect(swatch, &fill_paint(theme.palette[entry.series]));
        canvas.draw_rect(swatch, &edge);
        if style.draw_labels {
            let r = &entry.label.rect;
            shaper.draw_at(canvas, &entry.label.text, r.left, r.top, entry.label.size, theme.legend_text);
        }
    }
}

fn draw_text(canvas: &skia::Canvas, layout: &Layout, style: &ChartStyle, shaper: &TextShaper) {
    let theme = &style.theme;
    for bar in &layout.bars {
        let color = if bar.highlight { theme.highlight } else { theme.text };
        let r = &bar.label.rect;
        shaper.draw_at(canvas, &bar.label.text, r.left, r.top, bar.label.size, color);
    }
    for t in layout.x_ticks.iter().chain(&layout.y_ticks) {
        let r = &t.label.rect;
        shaper.draw_at(canvas, &t.label.text, r.left, r.top, t.label.size, theme.text);
    }
    for t in [&layout.title, &layout.x_label].into_iter().flatten() {
        shaper.draw_at(canvas, &t.text, t.rect.left, t.rect.top, t.size, theme.text);
    }
    if let Some(t) = &layout.y_label {
        let cx = t.rect.center_x();
        let cy = (t.rect.top + t.rect.bottom) * 0.5;
        shaper.draw_vertical(canvas, &t.text, cx, cy, t.size, theme.text);
    }
}
