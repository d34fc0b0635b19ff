//! Navitia HTTP client.
//!
//! Every call is a single authenticated GET. There is no retry: a failure
//! is returned to the caller immediately.

use tracing::debug;

use crate::domain::{Journey, Location};
use crate::search::{JourneyQuery, JourneySource, LocationResolver};

use super::error::NavitiaError;
use super::types::{ApiErrorBody, JourneysResponse, PlacesResponse};

/// Default base URL for the journey API.
const DEFAULT_BASE_URL: &str = "https://api.sncf.com/v1";

/// Default coverage region.
const DEFAULT_COVERAGE: &str = "sncf";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of body characters kept in error messages.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the Navitia client.
#[derive(Debug, Clone)]
pub struct NavitiaConfig {
    /// API key, sent as the basic-auth user name
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Coverage region queried under `coverage/{region}/...`
    pub coverage: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NavitiaConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            coverage: DEFAULT_COVERAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the coverage region.
    pub fn with_coverage(mut self, coverage: impl Into<String>) -> Self {
        self.coverage = coverage.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Journey API client.
#[derive(Debug, Clone)]
pub struct NavitiaClient {
    http: reqwest::Client,
    api_key: String,
    coverage_url: String,
}

impl NavitiaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NavitiaConfig) -> Result<Self, NavitiaError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let coverage_url = format!(
            "{}/coverage/{}",
            config.base_url.trim_end_matches('/'),
            config.coverage
        );

        Ok(Self {
            http,
            api_key: config.api_key,
            coverage_url,
        })
    }

    /// Resolve a free-text name into ranked location candidates.
    pub async fn places(&self, query: &str) -> Result<Vec<Location>, NavitiaError> {
        let (status, body) = self.get("places", &[("q", query.to_string())]).await?;
        let response: PlacesResponse = parse_json(&success_body(status, body)?)?;
        Ok(response.places)
    }

    /// Fetch journey options, in the API's order.
    ///
    /// A `no_solution` answer is not an error: it yields an empty list.
    pub async fn journeys(&self, query: &JourneyQuery) -> Result<Vec<Journey>, NavitiaError> {
        let params = [
            ("from", query.from.clone()),
            ("to", query.to.clone()),
            ("datetime", query.datetime.to_string()),
            ("count", query.count.to_string()),
        ];

        let (status, body) = self.get("journeys", &params).await?;

        // Checked against the full body: real answers carry links and
        // context well past the excerpt length.
        if status == reqwest::StatusCode::NOT_FOUND
            && ApiErrorBody::parse(&body).is_some_and(|b| b.error.is_no_solution())
        {
            debug!(from = %query.from, to = %query.to, "journey API reported no solution");
            return Ok(Vec::new());
        }

        let response: JourneysResponse = parse_json(&success_body(status, body)?)?;
        match response.error {
            Some(error) if response.journeys.is_empty() && !error.is_no_solution() => {
                Err(NavitiaError::Api {
                    status: 200,
                    message: error.message.unwrap_or(error.id),
                })
            }
            _ => Ok(response.journeys),
        }
    }

    /// GET `{coverage_url}/{endpoint}` and return the status and full body.
    ///
    /// Authentication and rate limiting are mapped to errors here; other
    /// statuses are left to the caller.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<(reqwest::StatusCode, String), NavitiaError> {
        let url = format!("{}/{}", self.coverage_url, endpoint);
        debug!(%url, ?params, "journey API request");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Some(""))
            .query(params)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(NavitiaError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NavitiaError::RateLimited);
        }

        if !status.is_success() {
            return Ok((status, response.text().await.unwrap_or_default()));
        }

        Ok((status, response.text().await?))
    }
}

impl JourneySource for NavitiaClient {
    async fn journeys(&self, query: &JourneyQuery) -> Result<Vec<Journey>, NavitiaError> {
        NavitiaClient::journeys(self, query).await
    }
}

impl LocationResolver for NavitiaClient {
    async fn places(&self, query: &str) -> Result<Vec<Location>, NavitiaError> {
        NavitiaClient::places(self, query).await
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, NavitiaError> {
    serde_json::from_str(body).map_err(|e| NavitiaError::Json {
        message: e.to_string(),
        body: Some(excerpt(body)),
    })
}

/// The body of a successful response, or an `Api` error with an excerpt.
fn success_body(status: reqwest::StatusCode, body: String) -> Result<String, NavitiaError> {
    if status.is_success() {
        return Ok(body);
    }
    Err(NavitiaError::Api {
        status: status.as_u16(),
        message: excerpt(&body),
    })
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
