//! Date-indexed closing price table.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::security::Security;

/// Closing prices for a set of securities over a shared date index.
///
/// Cells are `Option<f64>`: `None` marks an absent price. Non-finite values
/// are never stored; [`PriceTable::set`] turns them into `None`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    columns: Vec<PriceColumn>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: FxHashMap<Security, usize>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct PriceColumn {
    security: Security,
    prices: Vec<Option<f64>>,
}

impl PriceTable {
    /// Create an empty table over `dates`, which must be ascending.
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            columns: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Append a column. `prices` must have one entry per date.
    pub fn insert(&mut self, security: Security, prices: Vec<f64>) -> Result<()> {
        if prices.len() != self.dates.len() {
            return Err(Error::ColumnLength {
                security,
                expected: self.dates.len(),
                actual: prices.len(),
            });
        }
        if self.index.contains_key(&security) {
            return Err(Error::DuplicateSecurity(security));
        }
        let prices = prices
            .into_iter()
            .map(|p| p.is_finite().then_some(p))
            .collect();
        self.index.insert(security, self.columns.len());
        self.columns.push(PriceColumn { security, prices });
        Ok(())
    }

    /// Overwrite one cell. Non-finite values are stored as absent.
    pub fn set(&mut self, date: NaiveDate, security: Security, price: Option<f64>) -> Result<()> {
        let row = self.row_of(date)?;
        let col = self.column_of(security)?;
        self.columns[col].prices[row] = price.filter(|p| p.is_finite());
        Ok(())
    }

    /// Mark one cell as absent.
    pub fn set_absent(&mut self, date: NaiveDate, security: Security) -> Result<()> {
        self.set(date, security, None)
    }

    /// Price at `(date, security)`. Outer `None` means the cell does not exist.
    pub fn get(&self, date: NaiveDate, security: Security) -> Option<Option<f64>> {
        let row = self.dates.binary_search(&date).ok()?;
        let col = *self.index.get(&security)?;
        Some(self.columns[col].prices[row])
    }

    /// Trading dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Securities in insertion order.
    pub fn securities(&self) -> impl Iterator<Item = Security> + '_ {
        self.columns.iter().map(|c| c.security)
    }

    /// Number of securities.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Borrow one security's column.
    pub fn series(&self, security: Security) -> Option<PriceSeries<'_>> {
        let col = *self.index.get(&security)?;
        Some(PriceSeries {
            security,
            dates: &self.dates,
            prices: &self.columns[col].prices,
        })
    }

    /// All columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PriceSeries<'_>> + '_ {
        self.columns.iter().map(|c| PriceSeries {
            security: c.security,
            dates: &self.dates,
            prices: &c.prices,
        })
    }

    fn row_of(&self, date: NaiveDate) -> Result<usize> {
        self.dates
            .binary_search(&date)
            .map_err(|_| Error::DateOutsideCalendar(date))
    }

    fn column_of(&self, security: Security) -> Result<usize> {
        self.index
            .get(&security)
            .copied()
            .ok_or(Error::UnknownSecurity(security))
    }
}

/// Read-only view of one security's prices.
#[derive(Clone, Copy, Debug)]
pub struct PriceSeries<'a> {
    security: Security,
    dates: &'a [NaiveDate],
    prices: &'a [Option<f64>],
}

impl<'a> PriceSeries<'a> {
    pub fn security(&self) -> Security {
        self.security
    }

    /// `(date, price)` pairs including absent cells.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + 'a {
        let (dates, prices) = (self.dates, self.prices);
        dates.iter().copied().zip(prices.iter().copied())
    }

    /// Present prices with absent cells dropped, order preserved.
    pub fn valid_prices(&self) -> Vec<f64> {
        self.prices.iter().flatten().copied().collect()
    }

    /// Dates whose price is absent.
    pub fn missing_dates(&self) -> Vec<NaiveDate> {
        self.iter()
            .filter_map(|(d, p)| p.is_none().then_some(d))
            .collect()
    }

    /// Dates whose price is zero or negative.
    pub fn non_positive_dates(&self) -> Vec<NaiveDate> {
        self.iter()
            .filter_map(|(d, p)| matches!(p, Some(v) if v <= 0.0).then_some(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn sample() -> PriceTable {
        let mut table = PriceTable::new(vec![date(1), date(2), date(3)]);
        table.insert(Security::Aapl, vec![100.0, 101.0, 102.0]).unwrap();
        table.insert(Security::Tsla, vec![200.0, f64::NAN, -1.0]).unwrap();
        table
    }

    #[test]
    fn nan_stored_as_absent() {
        let table = sample();
        assert_eq!(table.get(date(2), Security::Tsla), Some(None));
        assert_eq!(table.get(date(3), Security::Tsla), Some(Some(-1.0)));
    }

    #[test]
    fn get_outside_table() {
        let table = sample();
        assert_eq!(table.get(date(9), Security::Aapl), None);
        assert_eq!(table.get(date(1), Security::Meta), None);
    }

    #[test]
    fn set_absent_and_valid_prices() {
        let mut table = sample();
        table.set_absent(date(2), Security::Aapl).unwrap();
        let series = table.series(Security::Aapl).unwrap();
        assert_eq!(series.valid_prices(), vec![100.0, 102.0]);
        assert_eq!(series.missing_dates(), vec![date(2)]);
    }

    #[test]
    fn set_unknown_cell() {
        let mut table = sample();
        assert_eq!(
            table.set_absent(date(7), Security::Aapl),
            Err(Error::DateOutsideCalendar(date(7)))
        );
        assert_eq!(
            table.set_absent(date(1), Security::Nflx),
            Err(Error::UnknownSecurity(Security::Nflx))
        );
    }

    #[test]
    fn duplicate_column_rejected() {
        let mut table = sample();
        let err = table.insert(Security::Aapl, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, Error::DuplicateSecurity(Security::Aapl));
    }

    #[test]
    fn short_column_rejected() {
        let mut table = sample();
        assert_eq!(
            table.insert(Security::Meta, vec![1.0, 2.0]),
            Err(Error::ColumnLength {
                security: Security::Meta,
                expected: 3,
                actual: 2,
            })
        );
        assert_eq!(table.width(), 2);
        assert!(table.series(Security::Meta).is_none());
    }

    #[test]
    fn non_positive_dates() {
        let table = sample();
        let series = table.series(Security::Tsla).unwrap();
        assert_eq!(series.non_positive_dates(), vec![date(3)]);
        assert!(table.series(Security::Aapl).unwrap().non_positive_dates().is_empty());
    }

    #[test]
    fn insertion_order_kept() {
        let table = sample();
        let order: Vec<_> = table.securities().collect();
        assert_eq!(order, vec![Security::Aapl, Security::Tsla]);
        assert_eq!(table.width(), 2);
        assert_eq!(table.len(), 3);
    }
}
