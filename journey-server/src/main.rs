use std::net::SocketAddr;

use journey_server::navitia::{MockNavitia, NavitiaClient, NavitiaConfig};
use journey_server::search::{JourneySource, LocationResolver, SearchConfig};
use journey_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr_text = std::env::var("JOURNEY_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let addr: SocketAddr = match addr_text.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid JOURNEY_SERVER_ADDR '{addr_text}': {e}");
            std::process::exit(1);
        }
    };

    let config = SearchConfig::default();

    // Offline mode: serve canned data from a fixture file
    if let Ok(path) = std::env::var("JOURNEY_MOCK_DATA") {
        let mock = MockNavitia::from_file(&path).unwrap_or_else(|e| {
            error!("Failed to load mock data: {e}");
            std::process::exit(1);
        });
        warn!("Serving mock journey data from {path}");
        serve(AppState::new(mock, config), addr).await;
        return;
    }

    let api_key = match std::env::var("SNCF_API") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            error!("SNCF_API not set. Export your API key or set JOURNEY_MOCK_DATA.");
            std::process::exit(1);
        }
    };

    let mut navitia_config = NavitiaConfig::new(api_key);
    if let Ok(url) = std::env::var("SNCF_API_URL") {
        navitia_config = navitia_config.with_base_url(url);
    }
    let client = NavitiaClient::new(navitia_config).expect("Failed to create journey API client");

    serve(AppState::new(client, config), addr).await;
}

async fn serve<S>(state: AppState<S>, addr: SocketAddr)
where
    S: JourneySource + LocationResolver + Send + Sync + 'static,
{
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    info!("Journey search listening on http://{addr}");
    info!("  GET  /health                                    - Health check");
    info!("  GET  /search?origin=&destination=&datetime=&page= - Search journeys");
    info!("  GET  /stations?q=                               - Look up a station");

    axum::serve(listener, app).await.expect("Server error");
}
