//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::FareConfig;

/// Shared application state.
///
/// The network is immutable, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The metro network
    pub network: Arc<Network>,

    /// Estimate constants
    pub fares: Arc<FareConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, fares: FareConfig) -> Self {
        Self {
            network: Arc::new(network),
            fares: Arc::new(fares),
        }
    }
}
