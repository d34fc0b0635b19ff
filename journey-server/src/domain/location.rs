//! Resolved locations.

use serde::{Deserialize, Serialize};

/// A place candidate returned by the location resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Opaque identifier used in journey queries (e.g. `stop_area:SNCF:87686006`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Kind of place (`stop_area`, `administrative_region`, ...), if known.
    #[serde(default)]
    pub embedded_type: Option<String>,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            embedded_type: None,
        }
    }

    /// Set the place kind.
    pub fn with_embedded_type(mut self, kind: impl Into<String>) -> Self {
        self.embedded_type = Some(kind.into());
        self
    }
}
