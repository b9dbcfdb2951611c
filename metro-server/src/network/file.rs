//! Loading networks from JSON files.
//!
//! The file mirrors the three registries of a [`Network`]:
//!
//! ```json
//! {
//!   "stations": [{ "name": "A", "line": 1 }, { "name": "X", "line": 1, "interchange": true }],
//!   "lines": [{ "id": 1, "stations": ["A", "X"] }],
//!   "interchanges": [{ "station": "X", "lines": [1, 2] }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{LineId, StationName};

use super::error::NetworkError;
use super::model::{Network, StationSpec};

/// A station entry in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationEntry {
    /// Station name
    pub name: StationName,

    /// Home line
    pub line: LineId,

    /// Optional interchange flag, checked against the interchange registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interchange: Option<bool>,
}

/// A line entry in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineEntry {
    /// Line identifier
    pub id: LineId,

    /// Stations in traversal order
    pub stations: Vec<StationName>,
}

/// An interchange entry in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterchangeEntry {
    /// Interchange station
    pub station: StationName,

    /// Lines connected at this station
    pub lines: Vec<LineId>,
}

/// On-disk representation of a network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<StationEntry>,
    pub lines: Vec<LineEntry>,
    #[serde(default)]
    pub interchanges: Vec<InterchangeEntry>,
}

impl NetworkFile {
    /// Parse a network file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        serde_json::from_str(json).map_err(|e| NetworkError::Json {
            message: e.to_string(),
        })
    }

    /// Read and validate a network from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Network, NetworkError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading network file");

        let contents = std::fs::read_to_string(path).map_err(|e| NetworkError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)?.into_network()
    }

    /// Validate the file contents into a network.
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let stations = self
            .stations
            .into_iter()
            .map(|s| StationSpec {
                name: s.name,
                home_line: s.line,
                interchange: s.interchange,
            })
            .collect();
        let lines = self.lines.into_iter().map(|l| (l.id, l.stations)).collect();
        let interchanges = self
            .interchanges
            .into_iter()
            .map(|i| (i.station, i.lines))
            .collect();

        Network::new(stations, lines, interchanges)
    }
}

impl From<&Network> for NetworkFile {
    fn from(network: &Network) -> Self {
        Self {
            stations: network
                .stations()
                .iter()
                .map(|s| StationEntry {
                    name: s.name.clone(),
                    line: s.home_line,
                    interchange: Some(s.is_interchange),
                })
                .collect(),
            lines: network
                .lines()
                .iter()
                .map(|l| LineEntry {
                    id: l.id(),
                    stations: l.stations().to_vec(),
                })
                .collect(),
            interchanges: network
                .interchanges()
                .iter()
                .map(|i| InterchangeEntry {
                    station: i.station.clone(),
                    lines: i.lines.iter().copied().collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CROSS_JSON: &str = r#"{
        "stations": [
            { "name": "A", "line": 1 },
            { "name": "X", "line": 1, "interchange": true },
            { "name": "B", "line": 1 },
            { "name": "C", "line": 2 },
            { "name": "D", "line": 2, "interchange": false }
        ],
        "lines": [
            { "id": 1, "stations": ["A", "X", "B"] },
            { "id": 2, "stations": ["C", "X", "D"] }
        ],
        "interchanges": [
            { "station": "X", "lines": [1, 2] }
        ]
    }"#;

    #[test]
    fn parses_valid_json() {
        let net = NetworkFile::from_json(CROSS_JSON)
            .unwrap()
            .into_network()
            .unwrap();

        assert_eq!(net.stations().len(), 5);
        assert!(net.station("X").unwrap().is_interchange);
        assert_eq!(net.station("D").unwrap().home_line, LineId(2));
    }

    #[test]
    fn interchanges_default_to_empty() {
        let json = r#"{
            "stations": [{ "name": "A", "line": 1 }, { "name": "B", "line": 1 }],
            "lines": [{ "id": 1, "stations": ["A", "B"] }]
        }"#;
        let net = NetworkFile::from_json(json).unwrap().into_network().unwrap();
        assert!(net.interchanges().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = NetworkFile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, NetworkError::Json { .. }));
    }

    #[test]
    fn inconsistent_file_fails_validation() {
        let json = r#"{
            "stations": [{ "name": "A", "line": 1 }],
            "lines": [{ "id": 1, "stations": ["A", "Ghost"] }]
        }"#;
        let err = NetworkFile::from_json(json)
            .unwrap()
            .into_network()
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::UnknownStation {
                line: LineId(1),
                station: StationName::new("Ghost"),
            }
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CROSS_JSON.as_bytes()).unwrap();

        let net = NetworkFile::load(file.path()).unwrap();
        assert_eq!(net.lines().len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NetworkFile::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, NetworkError::Io { .. }));
    }

    #[test]
    fn export_then_load_preserves_topology() {
        let original = crate::network::patna_metro().unwrap();
        let json = serde_json::to_string(&NetworkFile::from(&original)).unwrap();
        let loaded = NetworkFile::from_json(&json).unwrap().into_network().unwrap();

        assert_eq!(loaded.stations(), original.stations());
        assert_eq!(loaded.lines(), original.lines());
        assert_eq!(loaded.interchanges(), original.interchanges());
    }
}
