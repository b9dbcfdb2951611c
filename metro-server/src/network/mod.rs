//! The static station/line network.
//!
//! A [`Network`] is built once at startup, from the built-in Patna Metro
//! data or a JSON file, and is read-only afterwards. Construction validates
//! that stations, lines and interchanges agree with one another.

mod builder;
mod error;
mod file;
mod model;
mod patna;

pub use builder::NetworkBuilder;
pub use error::NetworkError;
pub use file::{InterchangeEntry, LineEntry, NetworkFile, StationEntry};
pub use model::{Interchange, Line, Network, StationSpec};
pub use patna::patna_metro;
