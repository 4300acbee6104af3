//! # secflow
//!
//! Deterministic synthetic closing prices and order-flow statistics for a
//! six-name equity universe.
//!
//! ## Features
//!
//! - **Seeded generator**: business-day random walks, bit-for-bit reproducible
//! - **Strict volatility**: population std of simple returns, with explicit
//!   errors instead of NaN on short or non-positive series
//! - **Stable rankings**: top-N lists where ties keep insertion order
//! - **Gap scan**: absent and non-positive prices per security
//!
//! ## Quick Start
//!
//! ```
//! use secflow::{GeneratorConfig, OrderFlow, SummaryOptions, generate, summarize};
//!
//! let table = generate(&GeneratorConfig::default()).unwrap();
//! let summary = summarize(&table, &OrderFlow::sample(), SummaryOptions::default()).unwrap();
//!
//! assert_eq!(summary.most_ordered[0].to_string(), "1. AAPL: 2000");
//! assert_eq!(summary.scan.gaps.len(), 1);
//! ```
//!
//! ## Volatility
//!
//! Absent prices are dropped before returns are formed, so a gap joins its
//! two neighbours into a single return:
//!
//! ```
//! use secflow::stats::volatility;
//! use secflow::StatsError;
//!
//! assert_eq!(volatility(&[100.0, 120.0]).unwrap(), 0.0);
//! assert_eq!(
//!     volatility(&[100.0]),
//!     Err(StatsError::InsufficientData { valid: 1 })
//! );
//! ```
//!
//! ## Rankings
//!
//! ```
//! use secflow::{Direction, OrderFlow, top_n};
//!
//! let top = top_n(&OrderFlow::sample().fill_ratios(), Direction::Ascending, 5);
//! assert_eq!(format!("{:.2}", top[0]), "1. NFLX: 0.50");
//! ```

pub mod calendar;
mod error;
pub mod generator;
mod order_flow;
pub mod ranking;
pub mod scan;
mod security;
pub mod stats;
mod summary;
mod table;

// Re-export public API
pub use calendar::{HOURLY_BUCKETS, business_days, hour_labels};
pub use error::{Error, Result, StatsError};
pub use generator::{Gap, GeneratorConfig, RandomWalk, generate};
pub use order_flow::{FlowEntry, HourlyProfile, OrderFlow};
pub use ranking::{DEFAULT_TOP_N, Direction, Ranked, top_n};
pub use scan::{FlaggedDates, ScanReport, scan};
pub use security::Security;
pub use summary::{Summary, SummaryOptions, summarize};
pub use table::{PriceSeries, PriceTable};
