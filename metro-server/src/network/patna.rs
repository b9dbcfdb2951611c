//! The built-in Patna Metro network.

use super::builder::NetworkBuilder;
use super::error::NetworkError;
use super::model::Network;

/// Line 1, Danapur Cantonment to Khemni Chak.
const LINE_1: &[&str] = &[
    "Danapur Cantonment",
    "Saguna Mor",
    "RPS Mor",
    "Patliputra",
    "Rukanpura",
    "Raja Bazar",
    "Patna Zoo",
    "Vikas Bhawan",
    "Vidyut Bhawan",
    "Patna Junction",
    "Mithapur",
    "Ramkrishna Nagar",
    "Jaganpura",
    "Khemni Chak",
];

/// Line 2, Patna Junction to New ISBT.
const LINE_2: &[&str] = &[
    "Patna Junction",
    "Gandhi Maidan",
    "Akashvani",
    "PMCH",
    "Patna University",
    "Moin-ul-Haq Stadium",
    "Rajendra Nagar",
    "Malahi Pakri",
    "Khemni Chak",
    "Bhootnath",
    "Zero Mile",
    "New ISBT",
];

/// Create the Patna Metro network.
///
/// Both lines meet at Patna Junction and Khemni Chak. Shared stations take
/// Line 1 as their home line.
pub fn patna_metro() -> Result<Network, NetworkError> {
    NetworkBuilder::new()
        .line_with_stations(1, LINE_1)
        .line_with_stations(2, LINE_2)
        .interchange("Patna Junction", &[1, 2])
        .interchange("Khemni Chak", &[1, 2])
        .build()
}
