//! Fluent construction of networks.

use crate::domain::{LineId, StationName};

use super::error::NetworkError;
use super::model::{Network, StationSpec};

/// Builder for creating networks.
///
/// Collects declarations in order and validates everything at
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use metro_server::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .line_with_stations(1, &["A", "X", "B"])
///     .line_with_stations(2, &["C", "X", "D"])
///     .interchange("X", &[1, 2])
///     .build()
///     .unwrap();
///
/// assert_eq!(network.stations().len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<StationSpec>,
    lines: Vec<(LineId, Vec<StationName>)>,
    interchanges: Vec<(StationName, Vec<LineId>)>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with its home line.
    pub fn station(mut self, name: &str, home_line: u8) -> Self {
        self.stations.push(StationSpec::new(name, LineId(home_line)));
        self
    }

    /// Declare a line's station sequence.
    ///
    /// The stations must be registered separately.
    pub fn line(mut self, id: u8, stations: &[&str]) -> Self {
        let names = stations.iter().copied().map(StationName::new).collect();
        self.lines.push((LineId(id), names));
        self
    }

    /// Declare a line and register any of its stations not already
    /// registered, with this line as their home line.
    ///
    /// Stations shared with an earlier line keep the earlier line as home.
    pub fn line_with_stations(mut self, id: u8, stations: &[&str]) -> Self {
        for &name in stations {
            if !self.stations.iter().any(|s| s.name == name) {
                self.stations.push(StationSpec::new(name, LineId(id)));
            }
        }
        self.line(id, stations)
    }

    /// Declare an interchange and the lines it connects.
    ///
    /// Interchanges are tried in the order they are declared here.
    pub fn interchange(mut self, name: &str, lines: &[u8]) -> Self {
        let lines = lines.iter().copied().map(LineId).collect();
        self.interchanges.push((StationName::new(name), lines));
        self
    }

    /// Validate and build the network.
    pub fn build(self) -> Result<Network, NetworkError> {
        Network::new(self.stations, self.lines, self.interchanges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_registration() {
        let net = NetworkBuilder::new()
            .station("A", 1)
            .station("B", 1)
            .line(1, &["A", "B"])
            .build()
            .unwrap();

        assert_eq!(net.stations().len(), 2);
        assert_eq!(net.station("B").unwrap().home_line, LineId(1));
    }

    #[test]
    fn shared_station_keeps_first_home_line() {
        let net = NetworkBuilder::new()
            .line_with_stations(1, &["A", "X"])
            .line_with_stations(2, &["X", "B"])
            .interchange("X", &[1, 2])
            .build()
            .unwrap();

        assert_eq!(net.stations().len(), 3);
        assert_eq!(net.station("X").unwrap().home_line, LineId(1));
        assert_eq!(net.station("B").unwrap().home_line, LineId(2));
    }

    #[test]
    fn interchange_order_preserved() {
        let net = NetworkBuilder::new()
            .line_with_stations(1, &["P", "A", "Q"])
            .line_with_stations(2, &["Q", "B", "P"])
            .interchange("Q", &[1, 2])
            .interchange("P", &[2, 1])
            .build()
            .unwrap();

        let order: Vec<&str> = net
            .interchanges()
            .iter()
            .map(|i| i.station.as_str())
            .collect();
        assert_eq!(order, vec!["Q", "P"]);
    }

    #[test]
    fn unregistered_station_fails_build() {
        let result = NetworkBuilder::new()
            .station("A", 1)
            .line(1, &["A", "B"])
            .build();

        assert!(matches!(
            result,
            Err(NetworkError::UnknownStation { .. })
        ));
    }
}
