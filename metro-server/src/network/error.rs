//! Network configuration errors.
//!
//! Every variant describes static data that is inconsistent or unreadable.
//! These are fatal at startup: a network that fails to build is never
//! served.

use crate::domain::{LineId, StationName};

/// Errors raised while loading or validating a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The same station name was registered twice
    #[error("station {0} is registered more than once")]
    DuplicateStation(StationName),

    /// Two lines share an identifier
    #[error("{0} is declared more than once")]
    DuplicateLine(LineId),

    /// A line has no stations
    #[error("{0} has no stations")]
    EmptyLine(LineId),

    /// A line visits the same station twice
    #[error("{line} lists station {station} more than once")]
    RepeatedInLine { line: LineId, station: StationName },

    /// A line references a station missing from the registry
    #[error("{line} references unregistered station {station}")]
    UnknownStation { line: LineId, station: StationName },

    /// A registered station is not on any line
    #[error("station {0} is not on any line")]
    StationNotOnAnyLine(StationName),

    /// A station's home line does not contain it
    #[error("station {station} has home line {home_line}, which does not serve it")]
    HomeLineMismatch {
        station: StationName,
        home_line: LineId,
    },

    /// An explicit interchange flag disagrees with the interchange registry
    #[error("station {station} is flagged interchange={declared}, but the registry disagrees")]
    InterchangeFlagMismatch { station: StationName, declared: bool },

    /// The interchange registry names a station missing from the registry
    #[error("interchange {0} is not a registered station")]
    UnknownInterchangeStation(StationName),

    /// The interchange registry lists a station twice
    #[error("interchange {0} is declared more than once")]
    DuplicateInterchange(StationName),

    /// The interchange registry lists a station served by fewer than two lines
    #[error("station {0} is declared as an interchange but is on fewer than two lines")]
    NotAnInterchange(StationName),

    /// A station served by two or more lines is missing from the registry
    #[error("station {0} is on several lines but is not declared as an interchange")]
    UnregisteredInterchange(StationName),

    /// The registry's line set for an interchange differs from the lines serving it
    #[error("interchange {station} declares lines {declared:?}, but is served by {actual:?}")]
    InterchangeLinesMismatch {
        station: StationName,
        declared: Vec<LineId>,
        actual: Vec<LineId>,
    },

    /// The network file could not be read
    #[error("failed to read network file {path}: {message}")]
    Io { path: String, message: String },

    /// The network file is not valid JSON for a network
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::DuplicateStation(StationName::new("PMCH"));
        assert_eq!(err.to_string(), "station PMCH is registered more than once");

        let err = NetworkError::UnknownStation {
            line: LineId(2),
            station: StationName::new("Nowhere"),
        };
        assert_eq!(
            err.to_string(),
            "Line 2 references unregistered station Nowhere"
        );

        let err = NetworkError::HomeLineMismatch {
            station: StationName::new("Akashvani"),
            home_line: LineId(1),
        };
        assert_eq!(
            err.to_string(),
            "station Akashvani has home line Line 1, which does not serve it"
        );

        let err = NetworkError::InterchangeLinesMismatch {
            station: StationName::new("Khemni Chak"),
            declared: vec![LineId(1)],
            actual: vec![LineId(1), LineId(2)],
        };
        assert_eq!(
            err.to_string(),
            "interchange Khemni Chak declares lines [LineId(1)], but is served by [LineId(1), LineId(2)]"
        );
    }
}
