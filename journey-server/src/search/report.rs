//! Search orchestration and report rendering.

use std::fmt::Write;
use std::num::NonZeroUsize;

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::dates::normalize_at;
use crate::domain::{ApiDateTime, Journey, Location};
use crate::paging::{PageRequest, PageResult, paginate, render_page};

use super::config::SearchConfig;
use super::error::{SearchError, StationRole};
use super::provider::{JourneyQuery, JourneySource, LocationResolver};

const RULE: &str = "═══════════════════════════════════";
const THIN_RULE: &str = "─────────────────────────────────";

/// Display format for the "now" departure line.
const NOW_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A caller's journey search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text origin station name.
    pub origin: String,
    /// Free-text destination station name.
    pub destination: String,
    /// Free-form departure date; absent means now.
    pub datetime: Option<String>,
    /// 1-indexed page of results.
    pub page: i64,
}

impl SearchRequest {
    /// Search from now, first page.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            datetime: None,
            page: 1,
        }
    }

    /// Set the departure date.
    pub fn with_datetime(mut self, datetime: impl Into<String>) -> Self {
        self.datetime = Some(datetime.into());
        self
    }

    /// Set the requested page.
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }
}

/// Ranked candidates for one station name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationLookup {
    /// The name as the caller typed it.
    pub query: String,
    /// Best match first, already cut to the configured limit.
    pub candidates: Vec<Location>,
}

impl StationLookup {
    /// Keep at most `limit` candidates, preserving rank. The best match is
    /// always kept.
    pub fn new(query: impl Into<String>, mut candidates: Vec<Location>, limit: usize) -> Self {
        candidates.truncate(limit.max(1));
        Self {
            query: query.into(),
            candidates,
        }
    }

    /// The candidate the search proceeds with.
    pub fn selected(&self) -> Option<&Location> {
        self.candidates.first()
    }

    /// Candidate listing with the selected station marked.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "🔍 Searched for '{}':", self.query);
        for (i, place) in self.candidates.iter().enumerate() {
            let marker = if i == 0 { "✓" } else { " " };
            let _ = writeln!(out, "  {marker} {} (ID: {})", place.name, place.id);
        }
        if let Some(selected) = self.selected() {
            let _ = write!(out, "\n→ Selected: {}", selected.name);
        }

        out
    }
}

/// The departure time a search ran with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Trimmed caller input, if any was given.
    pub requested: Option<String>,
    /// The clock reading used for relative inputs.
    pub now: NaiveDateTime,
    /// What was sent upstream.
    pub datetime: ApiDateTime,
}

impl Departure {
    pub fn new(requested: Option<&str>, now: NaiveDateTime, datetime: ApiDateTime) -> Self {
        let requested = requested
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            requested,
            now,
            datetime,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        match &self.requested {
            Some(input) => {
                let _ = writeln!(out, "📅 Searching for trains departing after: {input}");
            }
            None => {
                let _ = writeln!(
                    out,
                    "📅 Searching for trains departing after: {} (now)",
                    self.now.format(NOW_FORMAT)
                );
            }
        }
        let _ = writeln!(out, "🔄 API datetime format: {}", self.datetime);

        out
    }
}

/// Everything a search produced, up to the point it stopped.
#[derive(Debug)]
pub struct SearchReport {
    pub request: SearchRequest,
    pub page_size: NonZeroUsize,
    pub departure: Option<Departure>,
    pub origin: Option<StationLookup>,
    pub destination: Option<StationLookup>,
    /// The full bulk fetch, in upstream order.
    pub journeys: Vec<Journey>,
    pub error: Option<SearchError>,
}

impl SearchReport {
    fn new(request: SearchRequest, page_size: NonZeroUsize) -> Self {
        Self {
            request,
            page_size,
            departure: None,
            origin: None,
            destination: None,
            journeys: Vec::new(),
            error: None,
        }
    }

    fn fail(mut self, error: SearchError) -> Self {
        warn!(error = %error, "journey search stopped");
        self.error = Some(error);
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The page request derived from the caller's page and configured size.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.request.page).with_page_size(self.page_size)
    }

    /// The requested page of journeys, when the search succeeded.
    pub fn page(&self) -> Option<PageResult<'_, Journey>> {
        if self.error.is_some() {
            return None;
        }
        paginate(&self.journeys, self.page_request()).ok()
    }

    /// Both stations, once resolved.
    pub fn stations(&self) -> Option<(&Location, &Location)> {
        let origin = self.origin.as_ref()?.selected()?;
        let destination = self.destination.as_ref()?.selected()?;
        Some((origin, destination))
    }

    /// Render the multi-section text report.
    pub fn render(&self) -> String {
        let mut out = banner("SNCF JOURNEY SEARCH");

        for lookup in [&self.origin, &self.destination].into_iter().flatten() {
            if lookup.selected().is_some() {
                out.push_str(&lookup.render());
                out.push_str("\n\n");
            }
        }

        match (&self.departure, self.stations()) {
            (Some(departure), Some(_)) => {
                out.push_str(&departure.render());
                out.push('\n');
                let _ = write!(out, "{THIN_RULE}\n🚄 AVAILABLE TRAINS\n{THIN_RULE}\n\n");

                match (&self.error, self.page()) {
                    (Some(error), _) => out.push_str(&error.to_report()),
                    (None, Some(page)) => out.push_str(&render_page(&page)),
                    (None, None) => {}
                }
            }
            _ => {
                if let Some(error) = &self.error {
                    out.push_str(&error.to_report());
                }
            }
        }

        let _ = write!(out, "\n{RULE}\n");
        out
    }
}

/// Outcome of a standalone station lookup.
#[derive(Debug)]
pub struct StationReport {
    pub lookup: Option<StationLookup>,
    pub error: Option<SearchError>,
}

impl StationReport {
    pub fn render(&self) -> String {
        let mut out = banner("STATION SEARCH");

        if let Some(lookup) = &self.lookup
            && let Some(best) = lookup.selected()
        {
            out.push_str(&lookup.render());
            out.push('\n');
            let _ = writeln!(out, "\n✅ Best match: {}", best.name);
            let _ = writeln!(out, "   ID: {}", best.id);
        }
        if let Some(error) = &self.error {
            out.push_str(&error.to_report());
        }

        let _ = write!(out, "\n{RULE}\n");
        out
    }
}

/// Journey search over a location resolver and journey source.
pub struct JourneySearch<'a, S> {
    source: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S> JourneySearch<'a, S>
where
    S: JourneySource + LocationResolver + Sync,
{
    pub fn new(source: &'a S, config: &'a SearchConfig) -> Self {
        Self { source, config }
    }

    /// Search for journeys departing after the requested time.
    ///
    /// Never fails: every problem is carried in the report.
    pub async fn search(&self, request: SearchRequest) -> SearchReport {
        self.search_at(request, Local::now().naive_local()).await
    }

    /// [`JourneySearch::search`] with an explicit current time.
    pub async fn search_at(&self, request: SearchRequest, now: NaiveDateTime) -> SearchReport {
        info!(
            origin = %request.origin,
            destination = %request.destination,
            datetime = ?request.datetime,
            page = request.page,
            "journey search"
        );

        let mut report = SearchReport::new(request.clone(), self.config.page_size);

        // The date is checked before any upstream call.
        let datetime = match normalize_at(request.datetime.as_deref(), now) {
            Ok(datetime) => datetime,
            Err(e) => return report.fail(e.into()),
        };
        report.departure = Some(Departure::new(request.datetime.as_deref(), now, datetime));

        let origin = match self.lookup(&request.origin, Some(StationRole::Origin)).await {
            Ok(lookup) => lookup,
            Err(e) => return report.fail(e),
        };
        report.origin = Some(origin);

        let destination = match self
            .lookup(&request.destination, Some(StationRole::Destination))
            .await
        {
            Ok(lookup) => lookup,
            Err(e) => return report.fail(e),
        };
        report.destination = Some(destination);

        let Some((from, to)) = report.stations() else {
            return report;
        };
        let query = JourneyQuery {
            from: from.id.clone(),
            to: to.id.clone(),
            datetime,
            count: self.config.fetch_count,
        };

        let journeys = match self.source.journeys(&query).await {
            Ok(journeys) => journeys,
            Err(e) => return report.fail(SearchError::upstream("searching for journeys", e)),
        };
        info!(count = journeys.len(), from = %query.from, to = %query.to, "fetched journeys");

        if journeys.is_empty() {
            return report.fail(SearchError::NoResultsFound);
        }
        report.journeys = journeys;

        if let Err(e) = paginate(&report.journeys, report.page_request()) {
            return report.fail(e.into());
        }

        report
    }

    /// Look up a station by name and list the best candidates.
    pub async fn find_station(&self, name: &str) -> StationReport {
        info!(name, "station search");

        match self.lookup(name, None).await {
            Ok(lookup) => StationReport {
                lookup: Some(lookup),
                error: None,
            },
            Err(error) => {
                warn!(error = %error, "station search failed");
                StationReport {
                    lookup: None,
                    error: Some(error),
                }
            }
        }
    }

    async fn lookup(
        &self,
        name: &str,
        role: Option<StationRole>,
    ) -> Result<StationLookup, SearchError> {
        let candidates = self
            .source
            .places(name)
            .await
            .map_err(|e| SearchError::upstream(format!("searching for '{name}'"), e))?;

        let lookup = StationLookup::new(name, candidates, self.config.station_candidates);
        if lookup.selected().is_none() {
            return Err(SearchError::StationNotFound {
                query: name.to_string(),
                role,
            });
        }

        Ok(lookup)
    }
}

fn banner(title: &str) -> String {
    format!("{RULE}\n    {title}\n{RULE}\n\n")
}
