//! Page arithmetic.

use std::num::NonZeroUsize;

/// Journeys shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Error returned when the requested page does not exist.
///
/// Carries enough context for the caller to pick a valid page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "page {requested} is out of range: {total} journey(s) available across {total_pages} page(s)"
)]
pub struct PageOutOfRange {
    pub requested: i64,
    pub total_pages: usize,
    pub total: usize,
}

/// A 1-indexed page request.
///
/// The page number is signed so that nonsense input such as `0` or `-3`
/// reaches [`paginate`] and is rejected there with a useful message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: NonZeroUsize,
}

impl PageRequest {
    /// Request a page with the default size.
    pub fn new(page: i64) -> Self {
        Self {
            page,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set a custom page size.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of a larger result set.
///
/// Borrows a contiguous window of the input; the input itself is never
/// reordered or copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<'a, T> {
    /// Items on this page, in input order.
    pub items: &'a [T],
    /// 1-indexed page number.
    pub page: usize,
    pub page_size: usize,
    /// Number of items across all pages.
    pub total: usize,
    pub total_pages: usize,
    /// 0-indexed offset of the first item on this page.
    pub start: usize,
}

impl<'a, T> PageResult<'a, T> {
    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 0-indexed offset one past the last item on this page.
    pub fn end(&self) -> usize {
        self.start + self.items.len()
    }

    /// 1-indexed position of the first item shown.
    pub fn first_shown(&self) -> usize {
        self.start + 1
    }

    /// 1-indexed position of the last item shown (inclusive).
    pub fn last_shown(&self) -> usize {
        self.end()
    }

    /// The following page number, if there is one.
    pub fn next_page(&self) -> Option<usize> {
        (self.page < self.total_pages).then_some(self.page + 1)
    }

    /// Iterate over `(position, item)` with 1-indexed positions across the
    /// whole result set.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (self.start + 1 + i, item))
    }
}

/// Number of pages needed for `total` items: `ceil(total / page_size)`.
///
/// ```
/// use std::num::NonZeroUsize;
/// use journey_server::paging::total_pages;
///
/// let ten = NonZeroUsize::new(10).unwrap();
/// assert_eq!(total_pages(0, ten), 0);
/// assert_eq!(total_pages(10, ten), 1);
/// assert_eq!(total_pages(23, ten), 3);
/// ```
pub fn total_pages(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// Select one page of `items`.
///
/// An empty input is not an error: it yields an empty page so callers can
/// tell "nothing found" apart from "no such page".
pub fn paginate<T>(items: &[T], request: PageRequest) -> Result<PageResult<'_, T>, PageOutOfRange> {
    let total = items.len();
    let pages = total_pages(total, request.page_size);

    let out_of_range = || PageOutOfRange {
        requested: request.page,
        total_pages: pages,
        total,
    };

    if request.page < 1 {
        return Err(out_of_range());
    }
    let page = usize::try_from(request.page).map_err(|_| out_of_range())?;
    if pages > 0 && page > pages {
        return Err(out_of_range());
    }

    if total == 0 {
        return Ok(PageResult {
            items: &[],
            page,
            page_size: request.page_size.get(),
            total,
            total_pages: 0,
            start: 0,
        });
    }

    let size = request.page_size.get();
    let start = (page - 1) * size;
    let end = (start + size).min(total);

    Ok(PageResult {
        items: &items[start..end],
        page,
        page_size: size,
        total,
        total_pages: pages,
        start,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Page count is the ceiling of total / size, and zero only when empty
        #[test]
        fn page_count(total in 0usize..1000, size in 1usize..50) {
            let size = NonZeroUsize::new(size).unwrap();
            let pages = total_pages(total, size);

            prop_assert_eq!(pages, (total + size.get() - 1) / size.get());
            prop_assert_eq!(pages == 0, total == 0);
        }

        /// Every valid page is a contiguous, order-preserving window of the input
        #[test]
        fn valid_pages_are_windows(total in 1usize..300, size in 1usize..30, pick in 0usize..1000) {
            let all: Vec<usize> = (0..total).collect();
            let size = NonZeroUsize::new(size).unwrap();
            let pages = total_pages(total, size);
            let page = pick % pages + 1;

            let result = paginate(&all, PageRequest::new(page as i64).with_page_size(size)).unwrap();
            let offset = (page - 1) * size.get();
            let expected_len = size.get().min(total - offset);

            prop_assert_eq!(result.items.len(), expected_len);
            prop_assert_eq!(result.items, &all[offset..offset + expected_len]);
        }

        /// Pages partition the input exactly
        #[test]
        fn pages_partition_input(total in 0usize..300, size in 1usize..30) {
            let all: Vec<usize> = (0..total).collect();
            let size = NonZeroUsize::new(size).unwrap();
            let pages = total_pages(total, size);

            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                let result = paginate(&all, PageRequest::new(page as i64).with_page_size(size)).unwrap();
                rebuilt.extend_from_slice(result.items);
            }
            prop_assert_eq!(rebuilt, all);
        }

        /// One past the last page is always rejected when there is data
        #[test]
        fn one_past_last_rejected(total in 1usize..300, size in 1usize..30) {
            let all: Vec<usize> = (0..total).collect();
            let size = NonZeroUsize::new(size).unwrap();
            let pages = total_pages(total, size);

            let err = paginate(&all, PageRequest::new(pages as i64 + 1).with_page_size(size)).unwrap_err();
            prop_assert_eq!(err.requested, pages as i64 + 1);
            prop_assert_eq!(err.total_pages, pages);
            prop_assert_eq!(err.total, total);
        }

        /// Paginating twice gives the same answer and leaves the input alone
        #[test]
        fn idempotent(total in 0usize..100, page in -2i64..15) {
            let all: Vec<usize> = (0..total).rev().collect();
            let before = all.clone();

            let first = paginate(&all, PageRequest::new(page)).map(|p| p.items.to_vec());
            let second = paginate(&all, PageRequest::new(page)).map(|p| p.items.to_vec());

            prop_assert_eq!(first, second);
            prop_assert_eq!(all, before);
        }
    }
}
