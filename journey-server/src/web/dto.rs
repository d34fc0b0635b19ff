//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, Location, display_timestamp};
use crate::paging::{PageResult, render_journey};
use crate::search::{SearchReport, SearchRequest};

/// Query string for a journey search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// Free-form departure date (defaults to now)
    pub datetime: Option<String>,

    /// 1-indexed page (defaults to 1)
    pub page: Option<i64>,
}

impl From<SearchQuery> for SearchRequest {
    fn from(query: SearchQuery) -> Self {
        let mut request = SearchRequest::new(query.origin, query.destination)
            .with_page(query.page.unwrap_or(1));
        request.datetime = query.datetime;
        request
    }
}

/// Query string for a station lookup.
#[derive(Debug, Deserialize)]
pub struct StationQuery {
    /// Station name to look up
    pub q: String,
}

/// A resolved station.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LocationDto {
    pub id: String,
    pub name: String,
}

impl LocationDto {
    pub fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
        }
    }
}

/// Where a page sits in the full result set.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaginationDto {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,

    /// 1-indexed position of the first journey shown
    pub showing_from: usize,

    /// 1-indexed position of the last journey shown (inclusive)
    pub showing_to: usize,

    /// The following page, if any
    pub next_page: Option<usize>,
}

impl PaginationDto {
    pub fn from_page<T>(page: &PageResult<'_, T>) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            total_pages: page.total_pages,
            showing_from: page.first_shown(),
            showing_to: page.last_shown(),
            next_page: page.next_page(),
        }
    }
}

/// A journey on the requested page.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Position across all pages
    pub number: usize,

    /// Departure as `YYYY-MM-DD HH:MM`
    pub departure: String,

    /// Arrival as `YYYY-MM-DD HH:MM`
    pub arrival: String,

    /// Duration as `{h}h {m}min`
    pub duration: String,

    pub transfers: u32,

    /// Public transport legs, only for journeys with changes
    pub route: Option<String>,

    /// The journey's text block, as in the plain-text report
    pub text: String,
}

impl JourneyResult {
    pub fn from_journey(number: usize, journey: &Journey) -> Self {
        Self {
            number,
            departure: display_timestamp(&journey.departure),
            arrival: display_timestamp(&journey.arrival),
            duration: journey.duration().to_string(),
            transfers: journey.transfers,
            route: if journey.is_direct() {
                None
            } else {
                journey.route_chain()
            },
            text: render_journey(number, journey),
        }
    }
}

/// JSON form of a search report.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub origin: Option<LocationDto>,
    pub destination: Option<LocationDto>,

    /// Departure sent to the journey API, `YYYYMMDDTHHMMSS`
    pub datetime: Option<String>,

    pub pagination: Option<PaginationDto>,
    pub journeys: Vec<JourneyResult>,

    /// Actionable message when the search did not produce a page
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn from_report(report: &SearchReport) -> Self {
        let page = report.page();

        Self {
            origin: report
                .origin
                .as_ref()
                .and_then(|l| l.selected())
                .map(LocationDto::from_location),
            destination: report
                .destination
                .as_ref()
                .and_then(|l| l.selected())
                .map(LocationDto::from_location),
            datetime: report.departure.as_ref().map(|d| d.datetime.to_string()),
            pagination: page.as_ref().map(PaginationDto::from_page),
            journeys: page
                .map(|p| {
                    p.numbered()
                        .map(|(n, j)| JourneyResult::from_journey(n, j))
                        .collect()
                })
                .unwrap_or_default(),
            error: report
                .error
                .as_ref()
                .map(|e| e.to_report().trim_end().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Section, SectionPlace, SectionType};

    fn leg(from: &str, to: &str) -> Section {
        Section {
            section_type: SectionType::PublicTransport,
            from: Some(SectionPlace {
                id: None,
                name: Some(from.to_string()),
            }),
            to: Some(SectionPlace {
                id: None,
                name: Some(to.to_string()),
            }),
        }
    }

    #[test]
    fn query_defaults_to_first_page() {
        let query = SearchQuery {
            origin: "Paris".to_string(),
            destination: "Lyon".to_string(),
            datetime: None,
            page: None,
        };
        let request = SearchRequest::from(query);

        assert_eq!(request.page, 1);
        assert_eq!(request.datetime, None);
        assert_eq!(request.origin, "Paris");
    }

    #[test]
    fn query_deserializes_from_url() {
        let query: SearchQuery = serde_json::from_value(serde_json::json!({
            "origin": "Paris",
            "destination": "Lyon",
            "datetime": "28/11/2025 08:00",
            "page": 2
        }))
        .unwrap();
        let request = SearchRequest::from(query);

        assert_eq!(request.page, 2);
        assert_eq!(request.datetime.as_deref(), Some("28/11/2025 08:00"));
    }

    #[test]
    fn journey_result_direct() {
        let journey = Journey {
            departure: "20251128T083000".to_string(),
            arrival: "20251128T113742".to_string(),
            duration_secs: 11262,
            transfers: 0,
            sections: vec![leg("Paris Gare de Lyon", "Marseille Saint-Charles")],
        };
        let result = JourneyResult::from_journey(4, &journey);

        assert_eq!(result.number, 4);
        assert_eq!(result.departure, "2025-11-28 08:30");
        assert_eq!(result.arrival, "2025-11-28 11:37");
        assert_eq!(result.duration, "3h 7min");
        assert_eq!(result.route, None);
        assert!(result.text.starts_with("  4. Depart: 2025-11-28 08:30"));
    }

    #[test]
    fn journey_result_with_change_has_route() {
        let journey = Journey {
            departure: "20251128T083000".to_string(),
            arrival: "20251128T140500".to_string(),
            duration_secs: 20100,
            transfers: 1,
            sections: vec![
                leg("Paris Gare de Lyon", "Lyon Part-Dieu"),
                leg("Lyon Part-Dieu", "Marseille Saint-Charles"),
            ],
        };
        let result = JourneyResult::from_journey(1, &journey);

        assert_eq!(
            result.route.as_deref(),
            Some("Paris Gare de Lyon → Lyon Part-Dieu | Lyon Part-Dieu → Marseille Saint-Charles")
        );
    }

    #[test]
    fn pagination_serializes_next_page() {
        let items: Vec<u8> = (0..23).collect();
        let page = crate::paging::paginate(&items, crate::paging::PageRequest::new(1)).unwrap();
        let json = serde_json::to_value(PaginationDto::from_page(&page)).unwrap();

        assert_eq!(json["total"], 23);
        assert_eq!(json["total_pages"], 3);
        assert_eq!(json["showing_from"], 1);
        assert_eq!(json["showing_to"], 10);
        assert_eq!(json["next_page"], 2);
    }
}
