// File: crates/barchart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use barchart_core::{BarChart, ChartStyle, EstimatedMeasure};

#[test]
fn render_rgba8_buffer() {
    let chart = BarChart::from_parts(
        vec![vec![250.0, 400.0], vec![100.0, 50.0]],
        vec!["A".into(), "B".into()],
        vec!["x".into(), "y".into()],
    )
    .unwrap();

    let mut style = ChartStyle::default();
    style.dpi = 72.0;
    style.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&style).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let layout = chart.layout(&style, &EstimatedMeasure).unwrap();
    assert_eq!((w as i32, h as i32), layout.pixel_size(style.dpi));

    // Top-left pixel is the padding around the tight box: figure background
    assert_eq!(&px[0..4], &[0x30, 0x30, 0x30, 255]);

    // Middle of the first bar carries the first palette color (amber)
    let bar = &layout.bars[0].rect;
    let x = (bar.center_x() - layout.bounds.left).round() as usize;
    let y = ((bar.top + bar.bottom) * 0.5 - layout.bounds.top).round() as usize;
    let i = y * stride + x * 4;
    assert_eq!(&px[i..i + 4], &[0xfb, 0xae, 0x17, 255]);
}
