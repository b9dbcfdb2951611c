//! The validated, read-only network model.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::{LineId, Station, StationName};

use super::error::NetworkError;

/// A station as declared in configuration, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSpec {
    /// Station name
    pub name: StationName,

    /// Declared home line
    pub home_line: LineId,

    /// Explicit interchange flag, if the source provides one.
    /// When present it must agree with the interchange registry.
    pub interchange: Option<bool>,
}

impl StationSpec {
    /// Create a spec with no explicit interchange flag.
    pub fn new(name: impl Into<StationName>, home_line: LineId) -> Self {
        Self {
            name: name.into(),
            home_line,
            interchange: None,
        }
    }
}

/// A metro line: an ordered sequence of stations.
///
/// Index order encodes adjacency; neighbouring entries are one unit of
/// travel apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    stations: Vec<StationName>,
}

impl Line {
    /// Returns the line identifier.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Returns the stations in traversal order.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// Position of a station on this line, by exact name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.as_str() == name)
    }

    /// Whether the line serves the named station.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// The stations travelled between `from` and `to`, inclusive, in the
    /// order they are visited.
    ///
    /// Returns `None` if either station is not on this line.
    pub fn slice(&self, from: &str, to: &str) -> Option<Vec<StationName>> {
        let start = self.position(from)?;
        let end = self.position(to)?;

        if start <= end {
            Some(self.stations[start..=end].to_vec())
        } else {
            let mut leg = self.stations[end..=start].to_vec();
            leg.reverse();
            Some(leg)
        }
    }
}

/// An interchange registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interchange {
    /// The interchange station
    pub station: StationName,

    /// The lines it connects
    pub lines: BTreeSet<LineId>,
}

/// The station/line graph.
///
/// Built once and never mutated. All lookups are exact string matches.
///
/// # Invariants
///
/// - Every station on a line is registered, and every registered station is
///   on at least one line
/// - Each station's home line serves it
/// - A station is in the interchange registry iff it is on two or more
///   lines, and its registered line set is exactly those lines
/// - No line lists a station twice
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    station_index: HashMap<StationName, usize>,
    lines: Vec<Line>,
    line_index: HashMap<LineId, usize>,
    interchanges: Vec<Interchange>,
    interchange_index: HashMap<StationName, usize>,
}

impl Network {
    /// Build and validate a network.
    ///
    /// Declaration order is preserved for stations, lines and interchanges;
    /// interchange order is significant to route resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] describing the first inconsistency found.
    pub fn new(
        stations: Vec<StationSpec>,
        lines: Vec<(LineId, Vec<StationName>)>,
        interchanges: Vec<(StationName, Vec<LineId>)>,
    ) -> Result<Self, NetworkError> {
        let mut station_index = HashMap::with_capacity(stations.len());
        for (i, spec) in stations.iter().enumerate() {
            if station_index.insert(spec.name.clone(), i).is_some() {
                return Err(NetworkError::DuplicateStation(spec.name.clone()));
            }
        }

        let mut line_index = HashMap::with_capacity(lines.len());
        let mut built_lines = Vec::with_capacity(lines.len());
        for (i, (id, names)) in lines.into_iter().enumerate() {
            if line_index.insert(id, i).is_some() {
                return Err(NetworkError::DuplicateLine(id));
            }
            if names.is_empty() {
                return Err(NetworkError::EmptyLine(id));
            }

            let mut seen = HashSet::with_capacity(names.len());
            for name in &names {
                if !station_index.contains_key(name) {
                    return Err(NetworkError::UnknownStation {
                        line: id,
                        station: name.clone(),
                    });
                }
                if !seen.insert(name) {
                    return Err(NetworkError::RepeatedInLine {
                        line: id,
                        station: name.clone(),
                    });
                }
            }

            built_lines.push(Line { id, stations: names });
        }

        // Lines actually serving each station
        let mut served_by: HashMap<&StationName, BTreeSet<LineId>> = HashMap::new();
        for line in &built_lines {
            for name in &line.stations {
                served_by.entry(name).or_default().insert(line.id);
            }
        }

        for spec in &stations {
            let Some(serving) = served_by.get(&spec.name) else {
                return Err(NetworkError::StationNotOnAnyLine(spec.name.clone()));
            };
            if !serving.contains(&spec.home_line) {
                return Err(NetworkError::HomeLineMismatch {
                    station: spec.name.clone(),
                    home_line: spec.home_line,
                });
            }
        }

        let mut interchange_index = HashMap::with_capacity(interchanges.len());
        let mut built_interchanges = Vec::with_capacity(interchanges.len());
        for (i, (name, declared)) in interchanges.into_iter().enumerate() {
            let Some(actual) = served_by.get(&name) else {
                return Err(NetworkError::UnknownInterchangeStation(name));
            };
            if interchange_index.contains_key(&name) {
                return Err(NetworkError::DuplicateInterchange(name));
            }
            if actual.len() < 2 {
                return Err(NetworkError::NotAnInterchange(name));
            }

            let declared: BTreeSet<LineId> = declared.into_iter().collect();
            if &declared != actual {
                return Err(NetworkError::InterchangeLinesMismatch {
                    station: name,
                    declared: declared.into_iter().collect(),
                    actual: actual.iter().copied().collect(),
                });
            }

            interchange_index.insert(name.clone(), i);
            built_interchanges.push(Interchange {
                station: name,
                lines: declared,
            });
        }

        let mut built_stations = Vec::with_capacity(stations.len());
        for spec in stations {
            let multi_line = served_by.get(&spec.name).is_some_and(|s| s.len() >= 2);
            if multi_line && !interchange_index.contains_key(&spec.name) {
                return Err(NetworkError::UnregisteredInterchange(spec.name));
            }
            if let Some(declared) = spec.interchange
                && declared != multi_line
            {
                return Err(NetworkError::InterchangeFlagMismatch {
                    station: spec.name,
                    declared,
                });
            }

            built_stations.push(Station {
                name: spec.name,
                home_line: spec.home_line,
                is_interchange: multi_line,
            });
        }

        Ok(Self {
            stations: built_stations,
            station_index,
            lines: built_lines,
            line_index,
            interchanges: built_interchanges,
            interchange_index,
        })
    }

    /// Look up a station by exact name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.station_index.get(name).map(|&i| &self.stations[i])
    }

    /// Look up a line by identifier.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.line_index.get(&id).map(|&i| &self.lines[i])
    }

    /// The lines an interchange station connects, or `None` if the
    /// station is not an interchange.
    pub fn interchange_lines(&self, name: &str) -> Option<&BTreeSet<LineId>> {
        self.interchange_index
            .get(name)
            .map(|&i| &self.interchanges[i].lines)
    }

    /// All interchanges, in declaration order.
    pub fn interchanges(&self) -> &[Interchange] {
        &self.interchanges
    }

    /// All stations, in declaration order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Search stations by case-insensitive substring.
    ///
    /// Intended for autocompletion; route queries themselves never go
    /// through this and stay exact-match.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.stations
            .iter()
            .filter(|s| s.name.as_str().to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}
