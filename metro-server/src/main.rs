use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::network::{Network, NetworkError, NetworkFile, patna_metro};
use metro_server::planner::{FareConfig, read_setting};
use metro_server::web::{AppState, create_router};

/// Default bind address.
const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    // A bad network is a configuration bug: refuse to start
    let network = match load_network() {
        Ok(network) => network,
        Err(e) => {
            error!("invalid network configuration: {e}");
            std::process::exit(1);
        }
    };
    info!(
        stations = network.stations().len(),
        lines = network.lines().len(),
        interchanges = network.interchanges().len(),
        "network loaded"
    );

    let fares = match FareConfig::from_env() {
        Ok(fares) => fares,
        Err(e) => {
            error!("invalid fare configuration: {e}");
            std::process::exit(1);
        }
    };
    info!(
        mins_per_station = fares.mins_per_station(),
        mins_per_interchange = fares.mins_per_interchange(),
        fare_per_station = fares.fare_per_station(),
        "fares configured"
    );

    let state = AppState::new(network, fares);
    let app = create_router(state);

    let addr = match read_setting(|key| std::env::var(key).ok(), "METRO_ADDR", DEFAULT_ADDR) {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid bind address: {e}");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("Metro Route Planner listening on http://{addr}");
    info!("  GET /health                 - Health check");
    info!("  GET /route?from=..&to=..    - Find a route");
    info!("  GET /api/stations/search    - Search stations");
    info!("  GET /api/lines              - List lines");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}

/// Load the network from `METRO_NETWORK_FILE`, or the built-in Patna Metro.
fn load_network() -> Result<Network, NetworkError> {
    match std::env::var("METRO_NETWORK_FILE") {
        Ok(path) => {
            info!(%path, "loading network file");
            NetworkFile::load(path)
        }
        Err(_) => patna_metro(),
    }
}
