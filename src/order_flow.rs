//! Static order-flow lookup tables.

use crate::calendar::HOURLY_BUCKETS;
use crate::error::{Error, Result};
use crate::security::Security;

/// Order counts for consecutive hourly buckets.
pub type HourlyProfile = [u32; HOURLY_BUCKETS];

/// Per-security order-flow figures.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowEntry {
    pub security: Security,
    /// Total orders placed.
    pub orders: u64,
    pub hourly: HourlyProfile,
    /// Fraction of order quantity actually executed.
    pub fill_ratio: f64,
    /// Executed price relative to placement price.
    pub execution_ratio: f64,
}

/// Order-flow tables for the whole universe, in insertion order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderFlow {
    entries: Vec<FlowEntry>,
}

impl OrderFlow {
    /// Build from entries, rejecting duplicates and ratios outside `[0, 1]`.
    pub fn new(entries: Vec<FlowEntry>) -> Result<Self> {
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.security == e.security) {
                return Err(Error::DuplicateSecurity(e.security));
            }
            check_ratio(e.security, "fill ratio", e.fill_ratio)?;
            check_ratio(e.security, "execution ratio", e.execution_ratio)?;
        }
        Ok(Self { entries })
    }

    /// The reference tables for the six-name universe.
    pub fn sample() -> Self {
        let entry = |security, orders, start: u32, fill_ratio, execution_ratio| FlowEntry {
            security,
            orders,
            hourly: std::array::from_fn(|i| start + 10 * i as u32),
            fill_ratio,
            execution_ratio,
        };
        Self {
            entries: vec![
                entry(Security::Meta, 1200, 50, 0.75, 0.98),
                entry(Security::Amzn, 1500, 70, 0.60, 0.97),
                entry(Security::Aapl, 2000, 100, 0.85, 0.99),
                entry(Security::Nflx, 800, 30, 0.50, 0.96),
                entry(Security::Googl, 1300, 60, 0.70, 0.98),
                entry(Security::Tsla, 1700, 80, 0.65, 0.97),
            ],
        }
    }

    pub fn entries(&self) -> &[FlowEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn order_counts(&self) -> Vec<(Security, u64)> {
        self.entries.iter().map(|e| (e.security, e.orders)).collect()
    }

    pub fn fill_ratios(&self) -> Vec<(Security, f64)> {
        self.entries.iter().map(|e| (e.security, e.fill_ratio)).collect()
    }

    pub fn execution_ratios(&self) -> Vec<(Security, f64)> {
        self.entries
            .iter()
            .map(|e| (e.security, e.execution_ratio))
            .collect()
    }

    pub fn hourly_profiles(&self) -> Vec<(Security, HourlyProfile)> {
        self.entries.iter().map(|e| (e.security, e.hourly)).collect()
    }
}

fn check_ratio(security: Security, kind: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::RatioOutOfRange {
            security,
            kind,
            value,
        })
    }
}
