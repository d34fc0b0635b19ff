//! Navitia client error types.

/// Errors that can occur when talking to the journey API.
#[derive(Debug, thiserror::Error)]
pub enum NavitiaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check the SNCF_API key")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the journey API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Mock fixture could not be loaded
    #[error("mock data error: {0}")]
    Mock(String),
}
