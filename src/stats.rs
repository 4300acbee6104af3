//! Return and dispersion statistics over price series.
//!
//! The kernels here are strict: they refuse to divide by a non-positive
//! price and refuse to produce a dispersion from fewer than two prices,
//! instead of letting NaN or infinity leak into a report.

use crate::error::{Error, Result, StatsError};
use crate::security::Security;
use crate::table::PriceTable;

/// Simple period-over-period returns: `(p[t] - p[t-1]) / p[t-1]`.
///
/// `n` prices give `n - 1` returns.
pub fn simple_returns(prices: &[f64]) -> std::result::Result<Vec<f64>, StatsError> {
    if prices.len() < 2 {
        return Err(StatsError::InsufficientData {
            valid: prices.len(),
        });
    }

    prices
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let prev = w[0];
            if prev <= 0.0 {
                return Err(StatsError::NonPositivePrice { index: i, price: prev });
            }
            Ok((w[1] - prev) / prev)
        })
        .collect()
}

/// Population standard deviation (divides by `n`, not `n - 1`).
///
/// Returns `None` for an empty slice.
pub fn population_std(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

/// Volatility of a price series: population std of its simple returns.
///
/// Absent prices must already be removed; see
/// [`PriceSeries::valid_prices`](crate::PriceSeries::valid_prices).
pub fn volatility(prices: &[f64]) -> std::result::Result<f64, StatsError> {
    let returns = simple_returns(prices)?;
    // simple_returns never yields an empty vec on success
    Ok(population_std(&returns).unwrap_or(0.0))
}

/// Volatility of every column in `table`, in column order.
///
/// Absent cells are dropped before returns are formed, so returns span
/// consecutive valid prices. The first failing column aborts the scan.
pub fn volatilities(table: &PriceTable) -> Result<Vec<(Security, f64)>> {
    table
        .iter()
        .map(|series| {
            let security = series.security();
            volatility(&series.valid_prices())
                .map(|vol| (security, vol))
                .map_err(|source| Error::Volatility { security, source })
        })
        .collect()
}
