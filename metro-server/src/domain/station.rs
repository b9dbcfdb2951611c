//! Station types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::LineId;

/// The display name of a station, which is also its identity.
///
/// Names are compared exactly: case and whitespace are significant and no
/// normalisation is applied anywhere. `" PMCH"` and `"pmch"` are both
/// different stations from `"PMCH"`.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationName;
///
/// let pmch = StationName::new("PMCH");
/// assert_eq!(pmch.as_str(), "PMCH");
/// assert_ne!(pmch, StationName::new("pmch"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Create a station name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StationName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for StationName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StationName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({:?})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered station.
///
/// A station served by several lines is still registered once, tagged with a
/// single home line that the resolver uses to decide which sequence to slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Station name
    pub name: StationName,

    /// The line used when routing from or to this station
    pub home_line: LineId,

    /// Whether the station bridges two or more lines
    pub is_interchange: bool,
}
