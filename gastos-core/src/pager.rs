//! Read-only windowed view over a row sequence with a fixed page size.

use crate::row::Row;

/// Rows per page when the caller does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Paging state: the current dataset plus a clamped page cursor.
///
/// The dataset is replaced wholesale on each new upload; replacing it
/// always returns the cursor to page 1.
#[derive(Debug, Clone)]
pub struct Pager {
    rows: Vec<Row>,
    page_size: usize,
    current_page: usize,
}

/// One rendered page plus the metadata a footer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub rows: &'a [Row],
    pub total_rows: usize,
    /// 1-based index of the first displayed row, 0 when the page is empty.
    pub start: usize,
    /// 1-based index of the last displayed row, 0 when the page is empty.
    pub end: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(rows: Vec<Row>, page_size: usize) -> Self {
        Pager {
            rows,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Replace the dataset wholesale and return to page 1.
    pub fn reset(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.current_page = 1;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// An empty dataset still counts as one page so page arithmetic stays
    /// well-defined; the caller renders an empty-state message instead of
    /// a table in that case.
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// Move by `delta` pages, clamping into [1, total_pages]. Never wraps.
    pub fn change_page(&mut self, delta: i64) -> usize {
        self.clamp_to(self.current_page as i64 + delta)
    }

    /// Jump straight to `page`, with the same clamping as `change_page`.
    pub fn goto(&mut self, page: usize) -> usize {
        self.clamp_to(i64::try_from(page).unwrap_or(i64::MAX))
    }

    fn clamp_to(&mut self, target: i64) -> usize {
        self.current_page = target.clamp(1, self.total_pages() as i64) as usize;
        self.current_page
    }

    /// Rows for the current page: indices [(page-1)*size, min(page*size, len)).
    pub fn page(&self) -> PageView<'_> {
        let lo = (self.current_page - 1) * self.page_size;
        let hi = (lo + self.page_size).min(self.rows.len());
        let rows = &self.rows[lo.min(self.rows.len())..hi];
        PageView {
            rows,
            total_rows: self.rows.len(),
            start: if rows.is_empty() { 0 } else { lo + 1 },
            end: hi,
            current_page: self.current_page,
            total_pages: self.total_pages(),
        }
    }
}
