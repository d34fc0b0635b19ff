//! Domain types for journey search.
//!
//! Typed records for the data exchanged with the journey API. Journeys
//! are read-only snapshots of an API response and are never re-sorted or
//! mutated after deserialization.

mod journey;
mod location;
mod timestamp;

pub use journey::{Journey, JourneyDuration, Section, SectionPlace, SectionType, UNKNOWN_PLACE};
pub use location::Location;
pub use timestamp::{API_DATETIME_FORMAT, ApiDateTime, display_timestamp};
