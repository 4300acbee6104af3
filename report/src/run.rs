//! Report pipeline: generate → summarize → print → chart.

use std::io::Write;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::Serialize;

use secflow::{PriceTable, Summary, generate, summarize};

use crate::chart::HourlyChart;
use crate::config::Config;
use crate::error::Result;

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Plain-text report with a terminal chart.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Options for a report run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub format: Format,
    /// Also save the chart as SVG here.
    pub chart_path: Option<PathBuf>,
}

/// Everything a run produces, as serialised by `--format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub seed: u64,
    pub dates: &'a [chrono::NaiveDate],
    pub summary: &'a Summary,
}

/// Build the price table for `config`.
pub fn build_table(config: &Config) -> Result<PriceTable> {
    let generator = config.generator();
    let table = generate(&generator)?;
    info!(
        "generated {} securities x {} business days (seed {})",
        table.width(),
        table.len(),
        generator.seed
    );
    for gap in &generator.gaps {
        debug!("injected gap: {} on {}", gap.security, gap.date);
    }
    Ok(table)
}

/// Execute a full report run, writing the report to `out`.
pub fn run(config: &Config, opts: &RunOptions, out: &mut impl Write) -> Result<()> {
    let table = build_table(config)?;
    let flow = config.order_flow()?;

    debug!("computing volatility, rankings and gap scan");
    let summary = summarize(&table, &flow, config.summary_options())?;
    for flagged in &summary.scan.invalid {
        warn!(
            "{} has {} non-positive price(s)",
            flagged.security,
            flagged.dates.len()
        );
    }

    let chart = HourlyChart::from_flow(&flow, &config.chart);

    match opts.format {
        Format::Text => {
            let mut text = String::new();
            summary.write_volatility(&mut text).map_err(fmt_err)?;
            text.push('\n');
            summary.write_orders(&mut text).map_err(fmt_err)?;
            text.push('\n');
            text.push_str(&chart.render_text()?);
            text.push('\n');
            summary.write_execution(&mut text).map_err(fmt_err)?;
            out.write_all(text.as_bytes())?;
        }
        Format::Json => {
            let report = Report {
                seed: config.run.seed,
                dates: table.dates(),
                summary: &summary,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    if let Some(path) = &opts.chart_path {
        chart.save_svg(path)?;
        info!("chart saved to {}", path.display());
    }

    Ok(())
}

fn fmt_err(_: std::fmt::Error) -> std::io::Error {
    std::io::Error::other("failed to format report")
}
