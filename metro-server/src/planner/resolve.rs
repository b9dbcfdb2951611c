//! Route resolution over the network.
//!
//! Routes either stay on one line, or change exactly once at an
//! interchange. Pairs needing two or more changes are reported as
//! [`ResolveError::NotFound`]; the networks this serves guarantee any two
//! lines meet directly.

use tracing::{debug, trace};

use crate::domain::{Station, StationName};
use crate::network::{Line, Network};

use super::config::FareConfig;
use super::estimate::{Estimate, EstimateError};

/// Error from route resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A station name did not match any registered station
    #[error("unknown station: {0}")]
    InvalidStation(StationName),

    /// Both stations exist but no single-change route connects them
    #[error("no route from {origin} to {destination}")]
    NotFound {
        origin: StationName,
        destination: StationName,
    },
}

/// A resolved route.
///
/// # Invariants
///
/// - The path is non-empty and runs from origin to destination inclusive
/// - `change_at`, when present, appears in the path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: Vec<StationName>,
    change_at: Option<StationName>,
}

impl Route {
    /// The stations visited, origin and destination included.
    pub fn path(&self) -> &[StationName] {
        &self.path
    }

    /// Where the rider changes lines, if anywhere.
    pub fn change_at(&self) -> Option<&StationName> {
        self.change_at.as_ref()
    }

    /// Number of line changes: 0 or 1.
    pub fn interchange_count(&self) -> usize {
        usize::from(self.change_at.is_some())
    }

    /// Number of station-to-station hops.
    pub fn stations_traveled(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The first station of the path.
    pub fn origin(&self) -> &StationName {
        &self.path[0]
    }

    /// The last station of the path.
    pub fn destination(&self) -> &StationName {
        &self.path[self.path.len() - 1]
    }

    /// Time and fare estimate for this route.
    pub fn estimate(&self, config: &FareConfig) -> Result<Estimate, EstimateError> {
        Estimate::compute(self.stations_traveled(), self.interchange_count(), config)
    }
}

/// Resolves routes against a borrowed network.
#[derive(Debug, Clone, Copy)]
pub struct RouteResolver<'a> {
    network: &'a Network,
}

impl<'a> RouteResolver<'a> {
    /// Create a resolver over a network.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Find a route between two stations, matched by exact name.
    ///
    /// Stations sharing a home line are joined by slicing that line. Otherwise
    /// every interchange is tried in declaration order and the shortest
    /// candidate is kept; on equal length the first one found wins.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidStation`] if either name is unknown (origin
    ///   is checked first)
    /// - [`ResolveError::NotFound`] if no interchange lies on both lines
    pub fn resolve(&self, origin: &str, destination: &str) -> Result<Route, ResolveError> {
        let from = self.lookup(origin)?;
        let to = self.lookup(destination)?;

        let not_found = || ResolveError::NotFound {
            origin: from.name.clone(),
            destination: to.name.clone(),
        };

        let origin_line = self.home_line(from).ok_or_else(not_found)?;

        if from.home_line == to.home_line {
            let path = origin_line.slice(origin, destination).ok_or_else(not_found)?;
            debug!(
                origin,
                destination,
                line = %from.home_line,
                stations = path.len(),
                "resolved same-line route"
            );
            return Ok(Route {
                path,
                change_at: None,
            });
        }

        let destination_line = self.home_line(to).ok_or_else(not_found)?;

        let mut best: Option<(Vec<StationName>, &StationName)> = None;
        for interchange in self.network.interchanges() {
            let via = interchange.station.as_str();

            let (Some(first_leg), Some(second_leg)) = (
                origin_line.slice(origin, via),
                destination_line.slice(via, destination),
            ) else {
                trace!(interchange = via, "interchange does not bridge both lines");
                continue;
            };

            let mut path = first_leg;
            path.extend(second_leg.into_iter().skip(1));
            trace!(interchange = via, stations = path.len(), "candidate route");

            if best
                .as_ref()
                .is_none_or(|(shortest, _)| path.len() < shortest.len())
            {
                best = Some((path, &interchange.station));
            }
        }

        let (path, via) = best.ok_or_else(not_found)?;
        debug!(
            origin,
            destination,
            change_at = %via,
            stations = path.len(),
            "resolved route with interchange"
        );

        Ok(Route {
            path,
            change_at: Some(via.clone()),
        })
    }

    fn lookup(&self, name: &str) -> Result<&'a Station, ResolveError> {
        self.network
            .station(name)
            .ok_or_else(|| ResolveError::InvalidStation(StationName::new(name)))
    }

    fn home_line(&self, station: &Station) -> Option<&'a Line> {
        self.network.line(station.home_line)
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
