//! Domain types for the metro route planner.
//!
//! Stations are identified by their display name and lines by a small
//! integer. These types carry no validation of their own; consistency
//! between them is enforced when a [`Network`](crate::network::Network)
//! is built.

mod line;
mod station;

pub use line::LineId;
pub use station::{Station, StationName};
