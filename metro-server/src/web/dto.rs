//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::network::Line;
use crate::planner::{EstimateError, FareConfig, Route};

/// Query for a route between two stations.
///
/// Both fields are required; they are optional here so a missing one can be
/// reported as a client error rather than a rejected extractor. An empty
/// value counts as missing.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: Option<String>,

    /// Destination station name
    pub to: Option<String>,
}

/// A resolved route with estimates.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Origin station, as requested
    pub from: String,

    /// Destination station, as requested
    pub to: String,

    /// Stations visited, origin and destination included
    pub path: Vec<String>,

    /// Number of hops between stations
    pub stations_traveled: usize,

    /// Number of line changes
    pub interchanges: usize,

    /// Where to change lines
    pub change_at: Option<String>,

    /// Estimated travel time in minutes
    pub estimated_time_mins: i64,

    /// Estimated fare
    pub estimated_cost: u32,
}

impl RouteResponse {
    /// Create from a resolved route.
    pub fn from_route(
        from: &str,
        to: &str,
        route: &Route,
        fares: &FareConfig,
    ) -> Result<Self, EstimateError> {
        let estimate = route.estimate(fares)?;

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            path: route.path().iter().map(|s| s.to_string()).collect(),
            stations_traveled: route.stations_traveled(),
            interchanges: route.interchange_count(),
            change_at: route.change_at().map(|s| s.to_string()),
            estimated_time_mins: estimate.time_mins(),
            estimated_cost: estimate.cost,
        })
    }
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search text
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name
    pub name: String,

    /// Home line number
    pub line: u8,

    /// Whether lines can be changed here
    pub interchange: bool,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.to_string(),
            line: station.home_line.number(),
            interchange: station.is_interchange,
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching stations
    pub stations: Vec<StationResult>,
}

/// A line and its stations.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line number
    pub id: u8,

    /// Stations in traversal order
    pub stations: Vec<String>,
}

impl LineResult {
    /// Create from a network Line.
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id().number(),
            stations: line.stations().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Response for the line listing.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    /// All lines, in declaration order
    pub lines: Vec<LineResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error kind
    pub code: &'static str,
}
