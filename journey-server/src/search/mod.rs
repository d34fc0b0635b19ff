//! Caller-facing journey search.
//!
//! Composes the date normalizer, station resolution and the paginator into
//! the two operations exposed to callers:
//!
//! - [`JourneySearch::search`]: origin and destination names, an optional
//!   free-form date and a page number in; a multi-section text report out
//! - [`JourneySearch::find_station`]: a name in; ranked candidates out
//!
//! Every failure becomes part of the report. Nothing here panics or
//! propagates an error to the transport layer.

mod config;
mod error;
mod provider;
mod report;

pub use config::SearchConfig;
pub use error::{SearchError, StationRole};
pub use provider::{JourneyQuery, JourneySource, LocationResolver};
pub use report::{Departure, JourneySearch, SearchReport, SearchRequest, StationLookup, StationReport};
