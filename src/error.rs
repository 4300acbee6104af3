//! Error types for generation and metric computation.

use chrono::NaiveDate;

use crate::security::Security;

/// Failures of the numeric kernels in [`crate::stats`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Fewer than two valid prices, so no return can be formed.
    #[error("insufficient data: {valid} valid price(s), need at least 2")]
    InsufficientData { valid: usize },

    /// A zero or negative price would be used as a return denominator.
    #[error("non-positive price {price} at position {index} used as return denominator")]
    NonPositivePrice { index: usize, price: f64 },
}

/// All errors produced by the library.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("calendar from {start} to {end} contains no business days")]
    EmptyCalendar { start: NaiveDate, end: NaiveDate },

    #[error("calendar start {start} is after end {end}")]
    InvalidCalendar { start: NaiveDate, end: NaiveDate },

    #[error("{0} is not a trading date in the price table")]
    DateOutsideCalendar(NaiveDate),

    #[error("unknown ticker: {0}")]
    UnknownTicker(String),

    #[error("{0} is not part of the configured universe")]
    UnknownSecurity(Security),

    #[error("{security}: column has {actual} prices for {expected} dates")]
    ColumnLength {
        security: Security,
        expected: usize,
        actual: usize,
    },

    #[error("{0} is configured more than once")]
    DuplicateSecurity(Security),

    #[error("{security}: scale must be finite and non-negative, got {scale}")]
    InvalidScale { security: Security, scale: f64 },

    #[error("{security}: base price must be finite and positive, got {base}")]
    InvalidBasePrice { security: Security, base: f64 },

    #[error("{security}: {kind} must be in [0, 1], got {value}")]
    RatioOutOfRange {
        security: Security,
        kind: &'static str,
        value: f64,
    },

    #[error("volatility for {security}: {source}")]
    Volatility {
        security: Security,
        #[source]
        source: StatsError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
