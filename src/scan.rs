//! Missing and invalid price detection.

use std::fmt;

use chrono::NaiveDate;

use crate::security::Security;
use crate::table::PriceTable;

/// Dates flagged for one security.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlaggedDates {
    pub security: Security,
    pub dates: Vec<NaiveDate>,
}

/// Result of scanning a price table. Securities with nothing to report are
/// left out of the corresponding list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScanReport {
    /// Absent prices.
    pub gaps: Vec<FlaggedDates>,
    /// Zero or negative prices.
    pub invalid: Vec<FlaggedDates>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty() && self.invalid.is_empty()
    }
}

/// Scan every column of `table`, in column order.
pub fn scan(table: &PriceTable) -> ScanReport {
    let mut report = ScanReport::default();
    for series in table.iter() {
        let security = series.security();
        let missing = series.missing_dates();
        if !missing.is_empty() {
            report.gaps.push(FlaggedDates {
                security,
                dates: missing,
            });
        }
        let invalid = series.non_positive_dates();
        if !invalid.is_empty() {
            report.invalid.push(FlaggedDates {
                security,
                dates: invalid,
            });
        }
    }
    report
}

fn join_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Gaps (Missing Prices):")?;
        for flagged in &self.gaps {
            writeln!(
                f,
                "{} has missing prices on: {}",
                flagged.security,
                join_dates(&flagged.dates)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Invalid Prices (Zero or Negative):")?;
        for flagged in &self.invalid {
            writeln!(
                f,
                "{} has invalid prices on: {}",
                flagged.security,
                join_dates(&flagged.dates)
            )?;
        }
        Ok(())
    }
}
