//! Route planner.
//!
//! Answers "how do I get from A to B" over a [`Network`](crate::network::Network):
//! a same-line slice, or a two-leg route changing once at the interchange
//! that gives the fewest stations. Resolved routes carry time and fare
//! estimates derived from a [`FareConfig`].

mod config;
mod estimate;
mod resolve;

pub use config::{
    ConfigError, FARE_PER_STATION_VAR, FareConfig, MINS_PER_INTERCHANGE_VAR, MINS_PER_STATION_VAR,
    read_setting,
};
pub use estimate::{Estimate, EstimateError};
pub use resolve::{ResolveError, Route, RouteResolver};
