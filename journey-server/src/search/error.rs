//! Search error taxonomy.
//!
//! Each variant carries just what the caller needs to adjust and retry.
//! [`SearchError::to_report`] turns any of them into user-facing text.

use std::fmt::{self, Write};

use crate::dates::InvalidDateFormat;
use crate::navitia::NavitiaError;
use crate::paging::PageOutOfRange;

/// Which end of the journey a station lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationRole {
    Origin,
    Destination,
}

impl fmt::Display for StationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationRole::Origin => f.write_str("origin"),
            StationRole::Destination => f.write_str("destination"),
        }
    }
}

/// Errors from the caller-facing search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The departure date could not be understood.
    #[error(transparent)]
    InvalidDateFormat(#[from] InvalidDateFormat),

    /// The requested page is outside `1..=total_pages`.
    #[error(transparent)]
    PageOutOfRange(#[from] PageOutOfRange),

    /// The route and time have no journeys at all.
    #[error("no journeys found for this route and time")]
    NoResultsFound,

    /// A station name resolved to nothing.
    #[error("no stations found for '{query}'")]
    StationNotFound { query: String, role: Option<StationRole> },

    /// The journey or location source could not be reached or refused us.
    #[error("API error while {action}: {source}")]
    UpstreamUnavailable {
        action: String,
        #[source]
        source: NavitiaError,
    },
}

impl SearchError {
    /// Wrap an upstream failure with what was being attempted.
    pub fn upstream(action: impl Into<String>, source: NavitiaError) -> Self {
        SearchError::UpstreamUnavailable {
            action: action.into(),
            source,
        }
    }

    /// Returns true for outcomes that are not faults: nothing matched.
    pub fn is_informational(&self) -> bool {
        matches!(self, SearchError::NoResultsFound)
    }

    /// Render an actionable message for the person or agent that asked.
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        match self {
            SearchError::InvalidDateFormat(e) => {
                let _ = writeln!(out, "❌ Could not parse date '{}'. Supported formats:", e.input);
                for format in e.accepted {
                    let _ = writeln!(out, "  - {format}");
                }
            }
            SearchError::PageOutOfRange(e) => {
                let _ = writeln!(out, "❌ Page {} does not exist.", e.requested);
                let _ = writeln!(
                    out,
                    "Found {} journey(s) across {} page(s).",
                    e.total, e.total_pages
                );
                let _ = match e.total_pages {
                    0 => writeln!(out, "Request page 1."),
                    1 => writeln!(out, "Request page 1 (the only page)."),
                    n => writeln!(out, "Request a page between 1 and {n}."),
                };
            }
            SearchError::NoResultsFound => {
                let _ = writeln!(
                    out,
                    "❌ No journeys found for this route and time. Try a different time or date."
                );
            }
            SearchError::StationNotFound { query, role } => {
                let _ = writeln!(
                    out,
                    "❌ No stations found for '{query}'. Please check the spelling or try a different name."
                );
                if let Some(role) = role {
                    let _ = writeln!(out, "\n⚠️ Cannot proceed without valid {role} station.");
                }
            }
            SearchError::UpstreamUnavailable { action, source } => {
                let _ = writeln!(out, "❌ API Error while {action}: {source}");
            }
        }

        out
    }
}
