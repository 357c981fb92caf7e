//! Derived catalog page view and pagination helpers.

use serde::{Deserialize, Serialize};

use super::book::{Book, BookId};

/// One page of the catalog for the current search term.
///
/// Owned by the catalog controller and replaced wholesale on every
/// fetch; the only in-place mutation is the quantity patch applied by
/// a successful assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub books: Vec<Book>,
    /// Total matching records across all pages.
    pub count: u64,
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
}

impl CatalogPage {
    /// An empty page, used as the initial state and after a failed load.
    #[must_use]
    pub const fn empty(page: u32, page_size: u32) -> Self {
        Self {
            books: Vec::new(),
            count: 0,
            page,
            page_size,
        }
    }

    /// Number of pages needed to show all matches at this page size.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation)] // page counts stay far below u32::MAX
        {
            self.count.div_ceil(self.page_size as u64) as u32
        }
    }

    /// Look up a book on this page by id.
    #[must_use]
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub(crate) fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }
}

/// Compute the run of page buttons to render.
///
/// The window holds at most `max_buttons` contiguous page numbers,
/// starting two before the current page and clamped to
/// `[1, total_pages]`. When there are fewer pages than buttons the
/// window is the full range.
#[must_use]
pub fn page_window(current_page: u32, total_pages: u32, max_buttons: u32) -> Vec<u32> {
    if total_pages == 0 || max_buttons == 0 {
        return Vec::new();
    }
    if total_pages <= max_buttons {
        return (1..=total_pages).collect();
    }
    let start = current_page
        .saturating_sub(2)
        .clamp(1, total_pages - max_buttons + 1);
    (start..start + max_buttons).collect()
}
