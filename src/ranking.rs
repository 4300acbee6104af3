//! Stable top-N ranking of per-security scalars.

use std::cmp::Ordering;
use std::fmt;

use crate::security::Security;

/// Default length of every top list.
pub const DEFAULT_TOP_N: usize = 5;

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

/// One entry of a top list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ranked<T> {
    /// 1-based position.
    pub rank: usize,
    pub security: Security,
    pub value: T,
}

impl<T: fmt::Display> fmt::Display for Ranked<T> {
    /// `{rank}. {security}: {value}`; the value's own precision flag applies.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}: ", self.rank, self.security)?;
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Sort `entries` by value in `direction` and keep the first `n`.
///
/// The sort is stable: equal values keep their input order. Incomparable
/// values (NaN) are treated as equal to everything.
pub fn top_n<T>(entries: &[(Security, T)], direction: Direction, n: usize) -> Vec<Ranked<T>>
where
    T: PartialOrd + Copy,
{
    let mut sorted: Vec<(Security, T)> = entries.to_vec();
    sorted.sort_by(|a, b| {
        let ord = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });

    sorted
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, (security, value))| Ranked {
            rank: i + 1,
            security,
            value,
        })
        .collect()
}
