//! TOML configuration loading and validation.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! reference universe: six securities over April 2025, seed 42, one TSLA gap.

use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::Deserialize;

use secflow::{
    Direction, FlowEntry, Gap, GeneratorConfig, HourlyProfile, OrderFlow, RandomWalk, Security,
    SummaryOptions,
};

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub run: RunConfig,
    pub calendar: CalendarConfig,
    pub securities: Vec<SecurityConfig>,
    pub gaps: Vec<GapConfig>,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub seed: u64,
    pub top_n: usize,
    pub execution_order: Direction,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            top_n: secflow::DEFAULT_TOP_N,
            execution_order: Direction::Ascending,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            start: defaults.start,
            end: defaults.end,
        }
    }
}

/// Walk parameters and order-flow figures for one security.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityConfig {
    pub symbol: Security,
    pub base: f64,
    pub scale: f64,
    pub orders: u64,
    pub hourly: HourlyProfile,
    pub fill_ratio: f64,
    pub execution_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GapConfig {
    pub date: NaiveDate,
    pub symbol: Security,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub width: u32,
    pub height: u32,
    /// Hour of the first bucket, 24-hour clock.
    pub first_hour: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Hourly Orders for Information Technology Sector".into(),
            x_desc: "Time".into(),
            y_desc: "Number of Orders".into(),
            width: 1000,
            height: 600,
            first_hour: 9,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        let flow = OrderFlow::sample();
        let securities = generator
            .walks
            .iter()
            .zip(flow.entries())
            .map(|(w, e)| SecurityConfig {
                symbol: w.security,
                base: w.base,
                scale: w.scale,
                orders: e.orders,
                hourly: e.hourly,
                fill_ratio: e.fill_ratio,
                execution_ratio: e.execution_ratio,
            })
            .collect();
        let gaps = generator
            .gaps
            .iter()
            .map(|g| GapConfig {
                date: g.date,
                symbol: g.security,
            })
            .collect();
        Self {
            run: RunConfig::default(),
            calendar: CalendarConfig::default(),
            securities,
            gaps,
            chart: ChartConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Load `path` when given, otherwise the built-in reference configuration.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                info!("loaded config from {}", path.display());
                Ok(config)
            }
            None => {
                info!("using built-in reference configuration");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    ///
    /// Walk and ratio bounds are checked again by the library when the
    /// generator and order-flow tables are built.
    pub fn validate(&self) -> Result<()> {
        if self.securities.is_empty() {
            return Err(Error::Config("at least one security is required".into()));
        }
        for (i, s) in self.securities.iter().enumerate() {
            if self.securities[..i].iter().any(|p| p.symbol == s.symbol) {
                return Err(Error::Config(format!("{} is listed more than once", s.symbol)));
            }
        }
        if self.run.top_n == 0 {
            return Err(Error::Config("top_n must be > 0".into()));
        }
        if self.calendar.start > self.calendar.end {
            return Err(Error::Config(format!(
                "calendar start {} is after end {}",
                self.calendar.start, self.calendar.end
            )));
        }
        for gap in &self.gaps {
            if !self.securities.iter().any(|s| s.symbol == gap.symbol) {
                return Err(Error::Config(format!(
                    "gap on {} references unconfigured security {}",
                    gap.date, gap.symbol
                )));
            }
            if gap.date < self.calendar.start || gap.date > self.calendar.end {
                return Err(Error::Config(format!(
                    "gap date {} is outside the calendar",
                    gap.date
                )));
            }
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(Error::Config("chart width and height must be > 0".into()));
        }
        if self.chart.first_hour > 23 {
            return Err(Error::Config("chart first_hour must be in 0..=23".into()));
        }
        Ok(())
    }

    /// Generator input for this config.
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.run.seed,
            start: self.calendar.start,
            end: self.calendar.end,
            walks: self
                .securities
                .iter()
                .map(|s| RandomWalk {
                    security: s.symbol,
                    base: s.base,
                    scale: s.scale,
                })
                .collect(),
            gaps: self
                .gaps
                .iter()
                .map(|g| Gap {
                    date: g.date,
                    security: g.symbol,
                })
                .collect(),
        }
    }

    /// Order-flow tables for this config.
    pub fn order_flow(&self) -> Result<OrderFlow> {
        let entries = self
            .securities
            .iter()
            .map(|s| FlowEntry {
                security: s.symbol,
                orders: s.orders,
                hourly: s.hourly,
                fill_ratio: s.fill_ratio,
                execution_ratio: s.execution_ratio,
            })
            .collect();
        Ok(OrderFlow::new(entries)?)
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            top_n: self.run.top_n,
            execution_order: self.run.execution_order,
        }
    }
}
