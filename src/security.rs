//! The fixed security universe.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the six tracked securities.
///
/// Variant order is the canonical insertion order used as the tie-break in
/// every ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Security {
    Meta,
    Amzn,
    Aapl,
    Nflx,
    Googl,
    Tsla,
}

impl Security {
    /// All securities in canonical order.
    pub const ALL: [Security; 6] = [
        Security::Meta,
        Security::Amzn,
        Security::Aapl,
        Security::Nflx,
        Security::Googl,
        Security::Tsla,
    ];

    /// Exchange ticker.
    pub fn ticker(self) -> &'static str {
        match self {
            Security::Meta => "META",
            Security::Amzn => "AMZN",
            Security::Aapl => "AAPL",
            Security::Nflx => "NFLX",
            Security::Googl => "GOOGL",
            Security::Tsla => "TSLA",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Security {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Security::ALL
            .into_iter()
            .find(|sec| sec.ticker().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTicker(s.to_string()))
    }
}
