//! Line identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a metro line.
///
/// Lines are numbered with small integers and displayed as `Line N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u8);

impl LineId {
    /// Returns the numeric identifier.
    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(LineId(1).to_string(), "Line 1");
        assert_eq!(LineId(12).to_string(), "Line 12");
    }

    #[test]
    fn ordering_follows_number() {
        let mut lines = vec![LineId(3), LineId(1), LineId(2)];
        lines.sort();
        assert_eq!(lines, vec![LineId(1), LineId(2), LineId(3)]);
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&LineId(2)).unwrap(), "2");
        let id: LineId = serde_json::from_str("7").unwrap();
        assert_eq!(id.number(), 7);
    }
}
