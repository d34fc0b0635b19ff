//! Web layer for the journey search server.
//!
//! Exposes the search and station lookup operations over HTTP for tool
//! callers. Reports are plain text by default and JSON on request.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
