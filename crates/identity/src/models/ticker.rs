use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest symbol accepted from the generative capability.
pub const TICKER_MAX_LEN: usize = 5;

const SENTINEL: &str = "NONE";

/// Validated trading symbol: upper case, 1 to [`TICKER_MAX_LEN`] characters
/// from `A-Z`, `0-9`, `.` and `-`, never the `NONE` sentinel.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Validate a symbol. Input is trimmed and upper-cased first.
    ///
    /// # Examples
    ///
    /// ```
    /// use fintel_identity::models::Ticker;
    ///
    /// assert_eq!(Ticker::parse(" tsla ").unwrap().as_str(), "TSLA");
    /// assert_eq!(Ticker::parse("BRK.B").unwrap().as_str(), "BRK.B");
    /// assert!(Ticker::parse("NONE").is_none());
    /// assert!(Ticker::parse("TOOLONG").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty() || symbol.len() > TICKER_MAX_LEN || symbol == SENTINEL {
            return None;
        }
        if !symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
        {
            return None;
        }
        Some(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
