// File: crates/barchart-core/tests/theme.rs
// Purpose: Theme presets and hex color parsing.

use barchart_core::theme::{find, parse_hex_color, presets};
use skia_safe::Color;

#[test]
fn default_palette_is_amber_cyan_green() {
    let t = barchart_core::Theme::default();
    assert_eq!(t.name, "nvidia");
    assert_eq!(
        t.palette,
        vec![
            Color::from_argb(255, 0xfb, 0xae, 0x17),
            Color::from_argb(255, 0x00, 0xa0, 0xd1),
            Color::from_argb(255, 0x76, 0xb9, 0x00),
        ]
    );
    assert_eq!(t.highlight, t.palette[2]);
}

#[test]
fn presets_are_found_case_insensitively() {
    for t in presets() {
        assert_eq!(find(&t.name.to_uppercase()).map(|f| f.name), Some(t.name));
    }
    assert!(find("neon").is_none());
}

#[test]
fn parses_hex_colors() {
    assert_eq!(parse_hex_color("#303030"), Some(Color::from_argb(255, 0x30, 0x30, 0x30)));
    assert_eq!(parse_hex_color("76B900"), Some(Color::from_argb(255, 0x76, 0xb9, 0x00)));
    assert_eq!(parse_hex_color("#00A0D180"), Some(Color::from_argb(0x80, 0x00, 0xa0, 0xd1)));
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#GG0000"), None);
}
