//! All five descriptive computations bundled into one report.

use std::fmt;

use crate::error::Result;
use crate::order_flow::OrderFlow;
use crate::ranking::{self, DEFAULT_TOP_N, Direction, Ranked};
use crate::scan::{self, ScanReport};
use crate::security::Security;
use crate::stats;
use crate::table::PriceTable;

/// Knobs for [`summarize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Length of every top list.
    pub top_n: usize,
    /// Sort direction for the execution-ratio list.
    pub execution_order: Direction,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            execution_order: Direction::Ascending,
        }
    }
}

/// Computed statistics for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub top_n: usize,
    /// Volatility of every security, in table order.
    pub volatilities: Vec<(Security, f64)>,
    pub lowest_volatility: Vec<Ranked<f64>>,
    pub most_ordered: Vec<Ranked<u64>>,
    pub lowest_fill_ratio: Vec<Ranked<f64>>,
    pub execution_order: Direction,
    pub best_execution: Vec<Ranked<f64>>,
    pub scan: ScanReport,
}

/// Run the volatility stage, the three rankings and the gap scan.
pub fn summarize(table: &PriceTable, flow: &OrderFlow, options: SummaryOptions) -> Result<Summary> {
    let volatilities = stats::volatilities(table)?;
    let lowest_volatility = ranking::top_n(&volatilities, Direction::Ascending, options.top_n);

    Ok(Summary {
        top_n: options.top_n,
        lowest_volatility,
        volatilities,
        most_ordered: ranking::top_n(&flow.order_counts(), Direction::Descending, options.top_n),
        lowest_fill_ratio: ranking::top_n(&flow.fill_ratios(), Direction::Ascending, options.top_n),
        execution_order: options.execution_order,
        best_execution: ranking::top_n(
            &flow.execution_ratios(),
            options.execution_order,
            options.top_n,
        ),
        scan: scan::scan(table),
    })
}

impl Summary {
    /// Volatility block and the lowest-volatility list.
    pub fn write_volatility(&self, f: &mut impl fmt::Write) -> fmt::Result {
        writeln!(f, "Volatilities (Standard Deviation of Daily Returns):")?;
        for (security, vol) in &self.volatilities {
            writeln!(f, "{security}: {vol:.4} ({:.2}%)", vol * 100.0)?;
        }
        writeln!(f)?;
        writeln!(f, "Top {} by Lowest Volatility:", self.top_n)?;
        for r in &self.lowest_volatility {
            writeln!(f, "{}. {}: {:.2}%", r.rank, r.security, r.value * 100.0)?;
        }
        Ok(())
    }

    /// Most-ordered list.
    pub fn write_orders(&self, f: &mut impl fmt::Write) -> fmt::Result {
        writeln!(f, "Top {} Most Ordered Securities:", self.top_n)?;
        for r in &self.most_ordered {
            writeln!(f, "{r} orders")?;
        }
        Ok(())
    }

    /// Fill-ratio list, execution list and the scan report.
    pub fn write_execution(&self, f: &mut impl fmt::Write) -> fmt::Result {
        writeln!(f, "Top {} Securities with Lowest Fill Ratio:", self.top_n)?;
        for r in &self.lowest_fill_ratio {
            writeln!(f, "{r:.2}")?;
        }
        writeln!(f)?;
        match self.execution_order {
            Direction::Ascending => writeln!(
                f,
                "Top {} Securities with Best Execution (Lowest Price Relative to Placement):",
                self.top_n
            )?,
            Direction::Descending => writeln!(
                f,
                "Top {} Securities with Best Execution (Highest Execution Ratio):",
                self.top_n
            )?,
        }
        for r in &self.best_execution {
            writeln!(f, "{r:.2}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.scan)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_volatility(f)?;
        writeln!(f)?;
        self.write_orders(f)?;
        writeln!(f)?;
        self.write_execution(f)
    }
}
