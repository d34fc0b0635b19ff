//! Client-side pagination of journey results.
//!
//! The journey API has no notion of pages: one bulk fetch returns every
//! candidate. This module windows that list into fixed-size pages and
//! renders a page as numbered, human-readable summaries.

mod page;
mod render;

pub use page::{DEFAULT_PAGE_SIZE, PageOutOfRange, PageRequest, PageResult, paginate, total_pages};
pub use render::{next_page_hint, render_journey, render_page, render_summary};
