// File: crates/barchart-core/src/error.rs
// Summary: Error type returned by chart validation and rendering.

use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Lengths of series, names or labels disagree, or the dataset is empty.
    #[error("input shape mismatch: {what} (expected {expected}, got {actual})")]
    InputShape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{series} series but the palette only defines {palette} colors")]
    PaletteExhausted { series: usize, palette: usize },

    #[error("series {series} value {index} is not finite: {value}")]
    InvalidValue { series: usize, index: usize, value: f64 },

    #[error("invalid chart style: {0}")]
    InvalidStyle(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to write {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
