//! Search configuration.

use std::num::NonZeroUsize;

use crate::paging::DEFAULT_PAGE_SIZE;

/// Configuration parameters for journey search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Journeys shown per page.
    pub page_size: NonZeroUsize,

    /// Journeys requested from the API in one fetch.
    /// The API cannot page, so this bounds how many pages exist.
    pub fetch_count: usize,

    /// Station candidates listed per lookup.
    pub station_candidates: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(page_size: NonZeroUsize, fetch_count: usize, station_candidates: usize) -> Self {
        Self {
            page_size,
            fetch_count,
            station_candidates,
        }
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the bulk fetch size.
    pub fn with_fetch_count(mut self, fetch_count: usize) -> Self {
        self.fetch_count = fetch_count;
        self
    }

    /// Set how many station candidates to list.
    pub fn with_station_candidates(mut self, n: usize) -> Self {
        self.station_candidates = n;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fetch_count: 100,
            station_candidates: 3,
        }
    }
}
