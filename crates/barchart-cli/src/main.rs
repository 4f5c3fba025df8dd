// File: crates/barchart-cli/src/main.rs
// Summary: Renders a grouped frame-rate bar chart to PNG from a chart file, a CSV table or the built-in sample.

mod cli;
mod config;
mod telemetry;

use std::path::Path;

use anyhow::{Context, Result};
use barchart_core::{BarChart, ChartStyle};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::config::ChartInput;

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose, cli.quiet);

    let (input, stem) = load_input(&cli)?;

    let mut style = ChartStyle::default();
    input.style.apply(&mut style).context("invalid [style] section")?;
    cli.apply_style(&mut style).context("invalid style option")?;

    let mut text = input.text.clone();
    cli.apply_text(&mut text);

    let output = cli
        .output
        .clone()
        .or_else(|| input.output.clone())
        .unwrap_or_else(|| config::default_output(&stem));
    info!(
        series = input.names.len(),
        categories = input.labels.len(),
        theme = style.theme.name,
        dpi = style.dpi,
        "rendering chart"
    );
    let chart = BarChart::from_parts(input.data, input.names, input.labels)
        .context("invalid chart data")?
        .with_text(text);
    chart.check_style(&style).context("invalid chart style")?;

    // only once the chart is known to render
    if cli.mkdir {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    chart
        .render_to_png(&style, &output)
        .with_context(|| format!("failed to render '{}'", output.display()))?;

    if !cli.quiet {
        println!("Wrote {}", output.display());
    }
    Ok(())
}

/// Chart input and the stem used for the default output name.
fn load_input(cli: &Cli) -> Result<(ChartInput, String)> {
    if let Some(path) = &cli.config {
        let input = config::load_toml(path).with_context(|| format!("failed to load chart file '{}'", path.display()))?;
        return Ok((input, file_stem(path)));
    }
    if let Some(path) = &cli.csv {
        let input = config::load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        return Ok((input, file_stem(path)));
    }
    info!("no input given, using the SoftRas sample");
    Ok((config::softras_sample(), "performance2".to_string()))
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string()
}
