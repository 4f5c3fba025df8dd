// File: crates/barchart-core/tests/layout.rs
// Purpose: Bar offsets, cluster centers, legend placement and tight bounds.

use approx::assert_abs_diff_eq;
use barchart_core::grid::tick_label;
use barchart_core::layout::{bar_center, cluster_center, x_data_range};
use barchart_core::{BarChart, ChartStyle, ChartText, EstimatedMeasure, LegendLoc};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("cat {i}")).collect()
}

fn chart_with(series_count: usize) -> BarChart {
    let data = (0..series_count).map(|s| vec![100.0 + s as f64 * 50.0; 4]).collect();
    let names = (0..series_count).map(|s| format!("S{s}")).collect();
    BarChart::from_parts(data, names, labels(4)).expect("valid chart")
}

#[test]
fn category_labels_sit_at_cluster_centers() {
    let style = ChartStyle::default();
    for series_count in 1..=3 {
        let layout = chart_with(series_count).layout(&style, &EstimatedMeasure).expect("layout");
        let centers = layout.cluster_centers();
        assert_eq!(centers.len(), 4);
        for (base, &c) in centers.iter().enumerate() {
            let want = base as f64 + 0.5 * (series_count as f64 - 1.0) * style.bar_width;
            assert_abs_diff_eq!(c, want, epsilon = 1e-12);
            assert_abs_diff_eq!(c, cluster_center(base, series_count, style.bar_width), epsilon = 1e-12);
        }
        // label text is horizontally centered on the projected center
        for t in &layout.x_ticks {
            assert_abs_diff_eq!(t.label.rect.center_x(), layout.x_scale.to_px(t.value), epsilon = 1e-3);
        }
    }
}

#[test]
fn series_are_offset_side_by_side() {
    let style = ChartStyle::default();
    let layout = chart_with(3).layout(&style, &EstimatedMeasure).expect("layout");
    assert_eq!(layout.bars.len(), 12);
    for bar in &layout.bars {
        assert_abs_diff_eq!(bar.center, bar_center(bar.category, bar.series, 0.3), epsilon = 1e-12);
        assert_abs_diff_eq!(bar.center, bar.category as f64 + bar.series as f64 * 0.3, epsilon = 1e-12);
    }
    // neighbours within a cluster touch but do not overlap
    let by = |c: usize, s: usize| layout.bars.iter().find(|b| b.category == c && b.series == s).unwrap();
    for c in 0..4 {
        for s in 0..2 {
            assert_abs_diff_eq!(by(c, s).rect.right, by(c, s + 1).rect.left, epsilon = 1e-3);
        }
    }
}

#[test]
fn x_range_covers_all_bars_with_margin() {
    let (lo, hi) = x_data_range(4, 3, 0.3);
    let first = -0.15;
    let last = 3.0 + 0.6 + 0.15;
    let m = (last - first) * 0.05;
    assert_abs_diff_eq!(lo, first - m, epsilon = 1e-12);
    assert_abs_diff_eq!(hi, last + m, epsilon = 1e-12);
}

#[test]
fn bars_grow_from_zero_to_value() {
    let style = ChartStyle::default();
    let layout = chart_with(1).layout(&style, &EstimatedMeasure).expect("layout");
    let bar = &layout.bars[0];
    assert_abs_diff_eq!(bar.rect.bottom, layout.axes.bottom, epsilon = 1e-3);
    let frac = (layout.axes.bottom - bar.rect.top) / layout.axes.height();
    assert_abs_diff_eq!(frac, 100.0 / 500.0, epsilon = 1e-4);
    // value label sits on the bar top
    assert_abs_diff_eq!(bar.label.rect.bottom, bar.rect.top, epsilon = 1e-3);
}

#[test]
fn value_ticks_span_fixed_range() {
    let style = ChartStyle::default();
    let layout = chart_with(2).layout(&style, &EstimatedMeasure).expect("layout");
    let values: Vec<f64> = layout.y_ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 100.0, 200.0, 300.0, 400.0, 500.0]);
    assert_eq!(layout.y_ticks[5].label.text, "500");
}

#[test]
fn value_tick_labels_stay_exact_beyond_integer_range() {
    let style = ChartStyle { y_max: 1e20, ..ChartStyle::default() };
    let layout = chart_with(2).layout(&style, &EstimatedMeasure).expect("layout");
    let labels: Vec<&str> = layout.y_ticks.iter().map(|t| t.label.text.as_str()).collect();
    assert_eq!(labels.first(), Some(&"0"));
    assert_eq!(labels.last(), Some(&"100000000000000000000"));
    assert_eq!(labels[1], "20000000000000000000");
    assert_eq!(tick_label(-0.0), "0");
    assert_eq!(tick_label(2.5), "2.5");
}

#[test]
fn best_legend_avoids_tall_bars() {
    let style = ChartStyle::default();
    // tall bars on the right push the legend to the upper left
    let chart = BarChart::from_parts(vec![vec![10.0, 10.0, 10.0, 490.0]], vec!["A".into()], labels(4)).unwrap();
    let layout = chart.layout(&style, &EstimatedMeasure).unwrap();
    assert_eq!(layout.legend.loc, LegendLoc::UpperLeft);

    // and the mirror image keeps the default corner
    let chart = BarChart::from_parts(vec![vec![490.0, 10.0, 10.0, 10.0]], vec!["A".into()], labels(4)).unwrap();
    let layout = chart.layout(&style, &EstimatedMeasure).unwrap();
    assert_eq!(layout.legend.loc, LegendLoc::UpperRight);
}

#[test]
fn fixed_legend_location_is_respected() {
    let style = ChartStyle { legend: LegendLoc::LowerLeft, ..ChartStyle::default() };
    let layout = chart_with(2).layout(&style, &EstimatedMeasure).unwrap();
    assert_eq!(layout.legend.loc, LegendLoc::LowerLeft);
    assert!(layout.legend.frame.bottom < layout.axes.bottom);
    assert!(layout.legend.frame.left > layout.axes.left);
    assert_eq!(layout.legend.entries.len(), 2);
    assert_eq!(layout.legend.entries[1].label.text, "S1");
}

#[test]
fn tight_bounds_enclose_every_drawn_element() {
    let style = ChartStyle { fig_size: (15.0, 6.0), ..ChartStyle::default() };
    let chart = chart_with(3).with_text(ChartText::new("Title", "X", "Y"));
    let layout = chart.layout(&style, &EstimatedMeasure).unwrap();
    let b = layout.bounds;
    let inside = |r: &barchart_core::geometry::RectF| {
        r.left >= b.left && r.top >= b.top && r.right <= b.right && r.bottom <= b.bottom
    };
    assert!(inside(&layout.axes));
    assert!(inside(&layout.legend.frame));
    assert!(layout.text_boxes().all(|t| inside(&t.rect)));
    assert!(layout.title.is_some() && layout.x_label.is_some() && layout.y_label.is_some());

    let (w, h) = layout.pixel_size(300.0);
    assert_eq!(w, (b.width() * 300.0 / 72.0).ceil() as i32);
    assert_eq!(h, (b.height() * 300.0 / 72.0).ceil() as i32);
}

#[test]
fn empty_text_is_not_laid_out() {
    let layout = chart_with(1).layout(&ChartStyle::default(), &EstimatedMeasure).unwrap();
    assert!(layout.title.is_none());
    assert!(layout.x_label.is_none());
    assert!(layout.y_label.is_none());
}
