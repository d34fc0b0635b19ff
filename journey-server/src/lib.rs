//! SNCF journey search server.
//!
//! Answers "which trains run from here to there after this time?" for tool
//! callers: free-form departure dates are normalized, station names are
//! resolved, and the journey API's bulk result is served one page at a
//! time as a readable report.

pub mod dates;
pub mod domain;
pub mod navitia;
pub mod paging;
pub mod search;
pub mod web;
