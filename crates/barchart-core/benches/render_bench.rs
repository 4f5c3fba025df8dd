use barchart_core::{BarChart, ChartError, ChartStyle};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(categories: usize, series: usize) -> BarChart {
    let data = (0..series)
        .map(|s| (0..categories).map(|c| ((c * 37 + s * 101) % 480) as f64 + 0.25).collect())
        .collect();
    let names = (0..series).map(|s| format!("config {s}")).collect();
    let labels = (0..categories).map(|c| format!("{:.1} billion", 0.2 * c as f64)).collect();
    BarChart::from_parts(data, names, labels).expect("valid chart")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(cats, dpi) in &[(4usize, 100.0f32), (4, 300.0), (24, 100.0)] {
        group.bench_function(format!("c{cats}_dpi{dpi}"), |b| {
            let ch = build_chart(cats, 3);
            let mut style = ChartStyle::default();
            style.dpi = dpi;
            style.draw_labels = false;
            b.iter(|| -> Result<(), ChartError> {
                let bytes = ch.render_to_png_bytes(&style)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
