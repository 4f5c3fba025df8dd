// File: crates/barchart-core/src/theme.rs
// Summary: Color themes for bar chart rendering (vendor dark, dark, light).

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axes_face: skia::Color,
    pub axes_edge: skia::Color,
    pub text: skia::Color,
    pub tick: skia::Color,
    pub grid: skia::Color,
    pub legend_face: skia::Color,
    pub legend_edge: skia::Color,
    pub legend_text: skia::Color,
    pub bar_edge: skia::Color,
    /// Value label color for the highlighted series.
    pub highlight: skia::Color,
    /// One fill color per series, in series order.
    pub palette: Vec<skia::Color>,
}

impl Theme {
    /// Charcoal presentation look with amber / cyan / green series.
    pub fn nvidia() -> Self {
        let white = skia::Color::from_argb(255, 0xff, 0xff, 0xff);
        Self {
            name: "nvidia",
            background: skia::Color::from_argb(255, 0x30, 0x30, 0x30),
            axes_face: skia::Color::from_argb(255, 0x30, 0x30, 0x30),
            axes_edge: skia::Color::from_argb(255, 0x21, 0x21, 0x21),
            text: white,
            tick: white,
            grid: skia::Color::from_argb(255, 0x42, 0x42, 0x42),
            legend_face: skia::Color::from_argb(255, 0x30, 0x30, 0x30),
            legend_edge: skia::Color::from_argb(255, 0x21, 0x21, 0x21),
            legend_text: white,
            bar_edge: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            highlight: skia::Color::from_argb(255, 0x76, 0xb9, 0x00),
            palette: vec![
                skia::Color::from_argb(255, 0xfb, 0xae, 0x17), // amber
                skia::Color::from_argb(255, 0x00, 0xa0, 0xd1), // cyan
                skia::Color::from_argb(255, 0x76, 0xb9, 0x00), // green
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axes_face: skia::Color::from_argb(255, 18, 18, 20),
            axes_edge: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            legend_face: skia::Color::from_argb(255, 28, 28, 32),
            legend_edge: skia::Color::from_argb(255, 80, 80, 90),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            bar_edge: skia::Color::from_argb(255, 0, 0, 0),
            highlight: skia::Color::from_argb(255, 255, 230, 70),
            palette: vec![
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 255, 230, 70),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axes_face: skia::Color::from_argb(255, 250, 250, 252),
            axes_edge: skia::Color::from_argb(255, 60, 60, 70),
            text: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            legend_face: skia::Color::from_argb(255, 255, 255, 255),
            legend_edge: skia::Color::from_argb(255, 200, 200, 205),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
            bar_edge: skia::Color::from_argb(255, 20, 20, 30),
            highlight: skia::Color::from_argb(255, 20, 160, 90),
            palette: vec![
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 203, 75, 22),
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::nvidia() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::nvidia(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Option<skia::Color> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}
