//! Navitia journey API client.
//!
//! This module provides an HTTP client for the Navitia-based journey
//! planning API (as deployed at `api.sncf.com`). Two endpoints are used:
//!
//! - `places` resolves free-text names into ranked location candidates
//! - `journeys` returns every journey option for an origin, destination and
//!   departure time in one response
//!
//! The API has no paging of its own, so callers ask for a large `count` and
//! window the result client-side (see [`crate::paging`]).

mod client;
mod error;
mod mock;
mod types;

pub use client::{NavitiaClient, NavitiaConfig};
pub use error::NavitiaError;
pub use mock::MockNavitia;
pub use types::{ApiErrorBody, ApiErrorDetail, JourneysResponse, PlacesResponse};
