//! Navitia API response DTOs.
//!
//! Only the fields this service reads are modelled. Navitia sends many
//! more (links, disruptions, fares, co2 emissions) which serde ignores.

use serde::Deserialize;

use crate::domain::{Journey, Location};

/// Response from `coverage/{region}/places`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    /// Ranked candidates, best first. Absent when nothing matched.
    #[serde(default)]
    pub places: Vec<Location>,
}

/// Response from `coverage/{region}/journeys`.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneysResponse {
    /// Journey options in the API's own order. Absent when there is no
    /// solution.
    #[serde(default)]
    pub journeys: Vec<Journey>,

    /// Present instead of journeys when the API could not answer.
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

/// Error details from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable id, e.g. `no_solution` or `date_out_of_bounds`.
    pub id: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorDetail {
    /// The API found the query valid but no journey satisfies it.
    pub fn is_no_solution(&self) -> bool {
        self.id == "no_solution"
    }
}

impl ApiErrorBody {
    /// Parse an error body, if it is one.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
