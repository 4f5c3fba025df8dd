// File: crates/barchart-core/src/grid.rs
// Summary: Tick layout helpers.

/// Round tick values over `[min, max]` using 1/2/2.5/5 x 10^n steps,
/// aiming for at most `target` intervals. Both ends are included only when
/// they fall on a step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return vec![min];
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw - 1e-12)
        .unwrap_or(10.0 * mag);

    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Tick label text: integers without a fraction, otherwise the shortest form.
pub fn tick_label(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        // `+ 0.0` folds -0 into 0; `{:.0}` keeps values past i64 exact
        format!("{:.0}", v.round() + 0.0)
    } else {
        format!("{}", (v * 1e6).round() / 1e6)
    }
}
