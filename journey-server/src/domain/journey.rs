//! Journey records returned by the journey search API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for a section endpoint with no name.
pub const UNKNOWN_PLACE: &str = "?";

/// A complete journey option from origin to destination.
///
/// Timestamps are kept exactly as the API sent them; see
/// [`display_timestamp`](super::display_timestamp) for how they are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    /// Departure in `YYYYMMDDTHHMMSS` form.
    #[serde(rename = "departure_date_time")]
    pub departure: String,

    /// Arrival in `YYYYMMDDTHHMMSS` form.
    #[serde(rename = "arrival_date_time")]
    pub arrival: String,

    /// Total duration in seconds.
    #[serde(rename = "duration")]
    pub duration_secs: u64,

    /// Number of changes between vehicles.
    #[serde(rename = "nb_transfers", default)]
    pub transfers: u32,

    /// Ordered legs of the journey, including walks and waits.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Journey {
    /// Returns the duration split into whole hours and minutes.
    pub fn duration(&self) -> JourneyDuration {
        JourneyDuration::from_secs(self.duration_secs)
    }

    /// Returns true if the journey needs no change.
    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }

    /// Human-readable change count: "Direct" or "{n} change(s)".
    pub fn transfer_label(&self) -> String {
        if self.is_direct() {
            "Direct".to_string()
        } else {
            format!("{} change(s)", self.transfers)
        }
    }

    /// Iterate over the public transport legs only.
    pub fn public_transport_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_public_transport())
    }

    /// Render the public transport legs as `"A → B | B → C"`.
    ///
    /// Returns `None` when the journey has no public transport legs.
    pub fn route_chain(&self) -> Option<String> {
        let parts: Vec<String> = self
            .public_transport_sections()
            .map(|s| format!("{} → {}", s.from_name(), s.to_name()))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" | "))
        }
    }
}

/// A journey duration truncated to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyDuration {
    pub hours: u64,
    pub minutes: u64,
}

impl JourneyDuration {
    /// Split seconds using floor division (never rounds up).
    pub fn from_secs(secs: u64) -> Self {
        Self {
            hours: secs / 3600,
            minutes: (secs % 3600) / 60,
        }
    }
}

impl fmt::Display for JourneyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}min", self.hours, self.minutes)
    }
}

/// One leg of a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Kind of leg. Missing tags deserialize as [`SectionType::Other`].
    #[serde(rename = "type", default)]
    pub section_type: SectionType,

    #[serde(default)]
    pub from: Option<SectionPlace>,

    #[serde(default)]
    pub to: Option<SectionPlace>,
}

impl Section {
    /// Returns true for legs on a scheduled vehicle.
    pub fn is_public_transport(&self) -> bool {
        self.section_type == SectionType::PublicTransport
    }

    /// Origin name, or "?" if absent.
    pub fn from_name(&self) -> &str {
        place_name(self.from.as_ref())
    }

    /// Destination name, or "?" if absent.
    pub fn to_name(&self) -> &str {
        place_name(self.to.as_ref())
    }
}

fn place_name(place: Option<&SectionPlace>) -> &str {
    place
        .and_then(|p| p.name.as_deref())
        .unwrap_or(UNKNOWN_PLACE)
}

/// Section type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    PublicTransport,
    StreetNetwork,
    Transfer,
    Waiting,
    CrowFly,
    #[default]
    #[serde(other)]
    Other,
}

/// An endpoint of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPlace {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}
