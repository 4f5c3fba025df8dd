// File: crates/barchart-cli/src/config.rs
// Summary: Chart input from a TOML chart file, a CSV table or the built-in sample; style overrides.

use std::io::Read;
use std::path::{Path, PathBuf};

use barchart_core::theme::{self, parse_hex_color};
use barchart_core::{ChartStyle, ChartText, LegendLoc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything needed to build one chart, before validation.
#[derive(Debug, Clone, Default)]
pub struct ChartInput {
    pub text: ChartText,
    pub labels: Vec<String>,
    pub names: Vec<String>,
    pub data: Vec<Vec<f64>>,
    pub output: Option<PathBuf>,
    pub style: StyleOverrides,
}

/// Optional style fields; set fields replace the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverrides {
    pub theme: Option<String>,
    pub fig_size: Option<[f32; 2]>,
    pub dpi: Option<f32>,
    pub y_max: Option<f64>,
    pub bar_width: Option<f64>,
    pub highlight_series: Option<usize>,
    pub legend: Option<String>,
    pub palette: Option<Vec<String>>,
    pub font_families: Option<Vec<String>>,
    pub font_size: Option<f32>,
    pub title_size: Option<f32>,
    pub show_grid: Option<bool>,
    pub show_frame: Option<bool>,
}

impl StyleOverrides {
    pub fn apply(&self, style: &mut ChartStyle) -> Result<()> {
        // theme first so an explicit palette wins over the preset's
        if let Some(name) = &self.theme {
            match theme::find(name) {
                Some(t) => style.theme = t,
                None => warn!(theme = %name, kept = style.theme.name, "unknown theme, keeping current"),
            }
        }
        if let Some(colors) = &self.palette {
            style.theme.palette = colors
                .iter()
                .map(|c| parse_hex_color(c).ok_or_else(|| ConfigError::Invalid(format!("invalid palette color '{c}'"))))
                .collect::<Result<_>>()?;
        }
        if let Some([w, h]) = self.fig_size { style.fig_size = (w, h); }
        if let Some(v) = self.dpi { style.dpi = v; }
        if let Some(v) = self.y_max { style.y_max = v; }
        if let Some(v) = self.bar_width { style.bar_width = v; }
        if let Some(v) = self.highlight_series { style.highlight_series = Some(v); }
        if let Some(loc) = &self.legend {
            style.legend = loc.parse::<LegendLoc>().map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        if let Some(v) = &self.font_families { style.font_families = v.clone(); }
        if let Some(v) = self.font_size { style.font_size = v; }
        if let Some(v) = self.title_size { style.title_size = v; }
        if let Some(v) = self.show_grid { style.show_grid = v; }
        if let Some(v) = self.show_frame { style.show_frame = v; }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    x_label: String,
    #[serde(default)]
    y_label: String,
    output: Option<PathBuf>,
    labels: Vec<String>,
    series: Vec<SeriesEntry>,
    #[serde(default)]
    style: StyleOverrides,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeriesEntry {
    name: String,
    values: Vec<f64>,
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })
}

/// Parse a TOML chart file's contents.
pub fn parse_toml(content: &str) -> Result<ChartInput> {
    let file: ChartFile = toml::from_str(content)?;
    let (names, data) = file.series.into_iter().map(|s| (s.name, s.values)).unzip();
    Ok(ChartInput {
        text: ChartText::new(file.title, file.x_label, file.y_label),
        labels: file.labels,
        names,
        data,
        output: file.output,
        style: file.style,
    })
}

pub fn load_toml(path: &Path) -> Result<ChartInput> {
    let input = parse_toml(&read_file(path)?)?;
    debug!(path = %path.display(), series = input.names.len(), "loaded chart file");
    Ok(input)
}

/// Parse a CSV table: header `label,<series…>`, one row per category.
pub fn parse_csv(reader: impl Read) -> Result<ChartInput> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(ConfigError::Invalid("CSV needs a label column and at least one series column".into()));
    }
    let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    let mut data = vec![Vec::new(); names.len()];
    let mut labels = Vec::new();

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        labels.push(rec.get(0).unwrap_or_default().to_string());
        for (col, cell) in rec.iter().skip(1).enumerate() {
            let v = cell.parse::<f64>().map_err(|_| {
                ConfigError::Invalid(format!("row {}, column '{}': '{}' is not a number", row + 1, names[col], cell))
            })?;
            data[col].push(v);
        }
    }
    Ok(ChartInput { labels, names, data, ..ChartInput::default() })
}

pub fn load_csv(path: &Path) -> Result<ChartInput> {
    let file = std::fs::File::open(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let input = parse_csv(file)?;
    debug!(path = %path.display(), rows = input.labels.len(), "loaded csv table");
    Ok(input)
}

/// The software-rasterizer frame-rate comparison used when no input is given.
pub fn softras_sample() -> ChartInput {
    let strings = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    ChartInput {
        text: ChartText::new("Performance of SoftRas", "Triangles on screen", "Framerate"),
        labels: strings(&["0.4 billion", "0.6 billion", "0.8 billion", "1.0 billion"]),
        names: strings(&["Swr off & Culling off", "Swr off & Culling on", "Swr on & Culling on"]),
        data: vec![
            vec![109.0, 84.0, 71.0, 54.0],
            vec![381.0, 336.0, 270.0, 251.0],
            vec![477.0, 420.0, 353.0, 320.0],
        ],
        output: Some(PathBuf::from("../images/performance2.png")),
        style: StyleOverrides { fig_size: Some([15.0, 6.0]), ..StyleOverrides::default() },
    }
}

/// Default output next to the other figures: `../images/<stem>.png`.
pub fn default_output(stem: &str) -> PathBuf {
    PathBuf::from("../images").join(format!("{stem}.png"))
}
