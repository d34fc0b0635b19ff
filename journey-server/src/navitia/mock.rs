//! Mock journey API for testing without credentials.
//!
//! Serves canned places and journeys, either built in code or loaded from a
//! JSON fixture of the form:
//!
//! ```json
//! {
//!   "places": { "paris": [{"id": "stop_area:SNCF:87686006", "name": "Paris Gare de Lyon"}] },
//!   "routes": [{ "from": "stop_area:SNCF:87686006", "to": "stop_area:SNCF:87751008", "journeys": [] }]
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Deserialize;

use crate::domain::{Journey, Location};
use crate::search::{JourneyQuery, JourneySource, LocationResolver};

use super::error::NavitiaError;

/// On-disk fixture layout.
#[derive(Debug, Default, Deserialize)]
struct Fixture {
    #[serde(default)]
    places: HashMap<String, Vec<Location>>,
    #[serde(default)]
    routes: Vec<RouteFixture>,
}

#[derive(Debug, Deserialize)]
struct RouteFixture {
    from: String,
    to: String,
    journeys: Vec<Journey>,
}

/// Most recent queries kept per endpoint.
const RECORDED_QUERIES: usize = 64;

/// Mock journey API.
///
/// Place lookups match the query case-insensitively after trimming; unknown
/// names return no candidates. Journeys are keyed by `(from, to)` ids.
/// The last [`RECORDED_QUERIES`] queries to each endpoint are kept for
/// inspection.
#[derive(Debug, Clone, Default)]
pub struct MockNavitia {
    places: HashMap<String, Vec<Location>>,
    routes: HashMap<(String, String), Vec<Journey>>,
    place_failure: Option<String>,
    journey_failure: Option<String>,
    journey_queries: Arc<Mutex<VecDeque<JourneyQuery>>>,
    place_queries: Arc<Mutex<VecDeque<String>>>,
}

impl MockNavitia {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mock from a JSON fixture file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NavitiaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| NavitiaError::Mock(format!("failed to read {:?}: {}", path, e)))?;
        let fixture: Fixture = serde_json::from_str(&json)
            .map_err(|e| NavitiaError::Mock(format!("failed to parse {:?}: {}", path, e)))?;

        let mut mock = Self::new();
        for (query, candidates) in fixture.places {
            mock = mock.with_places(&query, candidates);
        }
        for route in fixture.routes {
            mock = mock.with_journeys(&route.from, &route.to, route.journeys);
        }
        Ok(mock)
    }

    /// Register candidates for a place query.
    pub fn with_places(mut self, query: &str, candidates: Vec<Location>) -> Self {
        self.places.insert(place_key(query), candidates);
        self
    }

    /// Register journeys between two location ids.
    pub fn with_journeys(mut self, from: &str, to: &str, journeys: Vec<Journey>) -> Self {
        self.routes
            .insert((from.to_string(), to.to_string()), journeys);
        self
    }

    /// Make every place lookup fail with a 503.
    pub fn with_place_failure(mut self, message: impl Into<String>) -> Self {
        self.place_failure = Some(message.into());
        self
    }

    /// Make every journey query fail with a 503.
    pub fn with_journey_failure(mut self, message: impl Into<String>) -> Self {
        self.journey_failure = Some(message.into());
        self
    }

    /// Recent journey queries, oldest first.
    pub fn journey_queries(&self) -> Vec<JourneyQuery> {
        recorded(&self.journey_queries)
    }

    /// Recent place queries, oldest first.
    pub fn place_queries(&self) -> Vec<String> {
        recorded(&self.place_queries)
    }
}

impl JourneySource for MockNavitia {
    async fn journeys(&self, query: &JourneyQuery) -> Result<Vec<Journey>, NavitiaError> {
        record(&self.journey_queries, query.clone());

        if let Some(message) = &self.journey_failure {
            return Err(unavailable(message));
        }

        Ok(self
            .routes
            .get(&(query.from.clone(), query.to.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

impl LocationResolver for MockNavitia {
    async fn places(&self, query: &str) -> Result<Vec<Location>, NavitiaError> {
        record(&self.place_queries, query.to_string());

        if let Some(message) = &self.place_failure {
            return Err(unavailable(message));
        }

        Ok(self
            .places
            .get(&place_key(query))
            .cloned()
            .unwrap_or_default())
    }
}

fn record<T>(log: &Mutex<VecDeque<T>>, item: T) {
    if let Ok(mut seen) = log.lock() {
        if seen.len() == RECORDED_QUERIES {
            seen.pop_front();
        }
        seen.push_back(item);
    }
}

fn recorded<T: Clone>(log: &Mutex<VecDeque<T>>) -> Vec<T> {
    log.lock()
        .map(|seen| seen.iter().cloned().collect())
        .unwrap_or_default()
}

fn place_key(query: &str) -> String {
    query.trim().to_lowercase()
}

fn unavailable(message: &str) -> NavitiaError {
    NavitiaError::Api {
        status: 503,
        message: message.to_string(),
    }
}
