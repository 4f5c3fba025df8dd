// File: crates/barchart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes with text disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the layout invariants below are still checked.
// - Always checks image size, padding background and bar fill against the layout.

use barchart_core::{BarChart, ChartStyle, EstimatedMeasure, LegendLoc, Theme};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn sample_chart() -> BarChart {
    BarChart::from_parts(
        vec![
            vec![109.0, 84.0, 71.0, 54.0],
            vec![381.0, 336.0, 270.0, 251.0],
            vec![477.0, 420.0, 353.0, 320.0],
        ],
        vec!["A".into(), "B".into(), "C".into()],
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
    )
    .expect("valid chart")
}

fn rgba(c: skia_safe::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

/// Render, check the pixels every golden must satisfy, and return the PNG.
fn render_bytes(style: &ChartStyle) -> Vec<u8> {
    let chart = sample_chart();
    let bytes = chart.render_to_png_bytes(style).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    let layout = chart.layout(style, &EstimatedMeasure).expect("layout");
    let (w, h) = layout.pixel_size(style.dpi);
    assert_eq!((img.width() as i32, img.height() as i32), (w, h));

    assert_eq!(img.get_pixel(0, 0).0, rgba(style.theme.background));
    let k = style.pixel_scale();
    for bar in &layout.bars {
        let x = ((bar.rect.center_x() - layout.bounds.left) * k) as u32;
        let y = (((bar.rect.top + bar.rect.bottom) * 0.5 - layout.bounds.top) * k) as u32;
        assert_eq!(img.get_pixel(x, y).0, rgba(style.theme.palette[bar.series]), "bar {}/{}", bar.series, bar.category);
    }
    bytes
}

fn base_style() -> ChartStyle {
    ChartStyle {
        fig_size: (6.0, 3.0),
        dpi: 72.0,
        draw_labels: false, // deterministic
        ..ChartStyle::default()
    }
}

#[test]
fn golden_grouped_bars() {
    write_or_compare("grouped_bars.png", &render_bytes(&base_style()));
}

#[test]
fn golden_grouped_bars_light_grid() {
    let style = ChartStyle {
        theme: Theme::light(),
        show_grid: true,
        show_frame: true,
        x_tick_marks: true,
        legend: LegendLoc::UpperLeft,
        ..base_style()
    };
    write_or_compare("grouped_bars_light_grid.png", &render_bytes(&style));
}
