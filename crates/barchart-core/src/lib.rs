// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports public API for grouped bar chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod layout;
pub mod style;
pub mod theme;
pub mod text;
pub mod format;
pub mod error;

pub use chart::{render_bar_chart, BarChart, ChartText};
pub use series::Series;
pub use axis::Axis;
pub use layout::Layout;
pub use style::{ChartStyle, LegendLoc};
pub use theme::Theme;
pub use text::{EstimatedMeasure, TextMeasure, TextShaper};
pub use format::format_value_label;
pub use error::{ChartError, ChartResult};
