// File: crates/barchart-cli/src/cli.rs
// Summary: Command-line arguments and their overrides on top of the chart input.

use std::path::PathBuf;

use barchart_core::{ChartStyle, ChartText};
use clap::Parser;

use crate::config::{Result, StyleOverrides};

#[derive(Parser, Debug)]
#[command(name = "perf-chart")]
#[command(author, version, about = "Render a grouped frame-rate bar chart to PNG")]
#[command(long_about = "Render a grouped frame-rate bar chart to PNG.\n\n\
    Input is a TOML chart file (--config), a CSV table (--csv), or the built-in\n\
    SoftRas sample when neither is given. Command-line values win over file values.")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// TOML chart file with labels, series and an optional [style] section
    #[arg(long, value_name = "FILE", conflicts_with = "csv")]
    pub config: Option<PathBuf>,

    /// CSV table: header `label,<series…>`, one row per category
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Create the output's parent directory if missing
    #[arg(long)]
    pub mkdir: bool,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub x_label: Option<String>,

    #[arg(long)]
    pub y_label: Option<String>,

    /// Theme preset (nvidia, dark, light)
    #[arg(long)]
    pub theme: Option<String>,

    /// Output resolution
    #[arg(long)]
    pub dpi: Option<f32>,

    /// Figure width in inches
    #[arg(long)]
    pub width: Option<f32>,

    /// Figure height in inches
    #[arg(long)]
    pub height: Option<f32>,

    /// Upper bound of the value axis
    #[arg(long)]
    pub y_max: Option<f64>,
}

impl Cli {
    /// Apply style flags after the file's `[style]` section.
    pub fn apply_style(&self, style: &mut ChartStyle) -> Result<()> {
        StyleOverrides {
            theme: self.theme.clone(),
            dpi: self.dpi,
            y_max: self.y_max,
            ..StyleOverrides::default()
        }
        .apply(style)?;
        if let Some(w) = self.width { style.fig_size.0 = w; }
        if let Some(h) = self.height { style.fig_size.1 = h; }
        Ok(())
    }

    pub fn apply_text(&self, text: &mut ChartText) {
        if let Some(t) = &self.title { text.title = t.clone(); }
        if let Some(t) = &self.x_label { text.x_label = t.clone(); }
        if let Some(t) = &self.y_label { text.y_label = t.clone(); }
    }
}
