//! HTTP route handlers.
//!
//! Failures of the search itself are part of the report and still answer
//! 200. Only a malformed query string is rejected, by the extractor.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::search::{JourneySearch, JourneySource, LocationResolver};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: JourneySource + LocationResolver + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search_journeys::<S>))
        .route("/stations", get(find_station::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts JSON.
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

/// Search for journeys between two named stations.
async fn search_journeys<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Response
where
    S: JourneySource + LocationResolver + Send + Sync + 'static,
{
    let search = JourneySearch::new(state.provider.as_ref(), state.config.as_ref());
    let report = search.search(query.into()).await;

    if accepts_json(&headers) {
        Json(SearchResponse::from_report(&report)).into_response()
    } else {
        report.render().into_response()
    }
}

/// Look up a station by name.
async fn find_station<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<StationQuery>,
) -> String
where
    S: JourneySource + LocationResolver + Send + Sync + 'static,
{
    let search = JourneySearch::new(state.provider.as_ref(), state.config.as_ref());
    search.find_station(&query.q).await.render()
}
