//! CLI entry point for the secflow report.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use secflow_report::config::Config;
use secflow_report::run::{self, Format, RunOptions};

#[derive(Parser)]
#[command(name = "secflow")]
#[command(about = "Synthetic price volatility, order-flow rankings and gap scan")]
#[command(version)]
struct Cli {
    /// Path to a config.toml (built-in reference universe if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the length of every top list
    #[arg(long)]
    top: Option<usize>,

    /// Also save the hourly order chart as SVG
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let mut config = match Config::resolve(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    if let Some(seed) = cli.seed {
        config.run.seed = seed;
    }
    if let Some(top) = cli.top {
        config.run.top_n = top;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let opts = RunOptions {
        format: cli.format,
        chart_path: cli.chart,
    };

    let stdout = std::io::stdout();
    if let Err(e) = run::run(&config, &opts, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
