// File: crates/barchart-core/src/format.rs
// Summary: Bar value label formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown instead of a value that rounds to zero.
pub const BELOW_ONE: &str = "< 1";

/// Number of decimals kept in value labels.
pub const LABEL_DECIMALS: u32 = 2;

/// Round to two decimals, half away from zero, on the shortest decimal
/// representation of `v` (so `54.005` rounds up even though its binary value
/// is slightly below).
pub fn round_label_value(v: f64) -> Option<Decimal> {
    let d = Decimal::from_str(&format!("{v}")).ok()?;
    Some(d.round_dp_with_strategy(LABEL_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
}

/// Text drawn above a bar: `"< 1"` when the value rounds to zero, otherwise
/// the rounded value with trailing zeros trimmed.
pub fn format_value_label(v: f64) -> String {
    match round_label_value(v) {
        Some(d) if d.is_zero() => BELOW_ONE.to_string(),
        Some(d) => d.normalize().to_string(),
        // out of Decimal range
        None => {
            let text = format!("{v:.2}");
            let text = text.trim_end_matches('0').trim_end_matches('.');
            if text == "0" || text == "-0" { BELOW_ONE.to_string() } else { text.to_string() }
        }
    }
}
