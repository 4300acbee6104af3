//! secflow-report: command-line report and hourly order chart for secflow.
//!
//! Loads an optional TOML config, generates the seeded price table, prints
//! the volatility, ranking and gap-scan report, and renders the hourly order
//! chart to the terminal (and optionally to SVG).

pub mod chart;
pub mod config;
pub mod error;
pub mod run;
