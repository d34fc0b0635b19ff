//! Collaborator interfaces for the search layer.
//!
//! These abstractions let the search be tested against canned data.

use crate::domain::{ApiDateTime, Journey, Location};
use crate::navitia::NavitiaError;

/// Parameters for one bulk journey fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyQuery {
    /// Origin location id.
    pub from: String,
    /// Destination location id.
    pub to: String,
    /// Earliest departure.
    pub datetime: ApiDateTime,
    /// How many journeys to ask for.
    pub count: usize,
}

/// Source of journey options.
pub trait JourneySource {
    /// Fetch journey options for a query, in the source's own order.
    ///
    /// An empty list means no journey matched; it is not an error.
    fn journeys(
        &self,
        query: &JourneyQuery,
    ) -> impl Future<Output = Result<Vec<Journey>, NavitiaError>> + Send;
}

/// Resolver from free-text names to location candidates.
pub trait LocationResolver {
    /// Return candidates ranked best-first. The first is conventionally
    /// taken as the match.
    fn places(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Location>, NavitiaError>> + Send;
}
