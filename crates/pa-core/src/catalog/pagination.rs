use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selectable number of rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Twenty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported page size {0} (expected 5, 10 or 20)")]
pub struct InvalidPageSize(pub usize);

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Twenty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<usize>().map_err(|_| InvalidPageSize(0))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Page cursor over a list of `len` items.
///
/// Invariants: `1 <= current_page <= total_pages` and
/// `total_pages == max(1, ceil(len / page_size))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: PageSize,
    current_page: usize,
    total_pages: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Pagination {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: 1,
            total_pages: 1,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Go back to the first page and recompute the page count for `len` items.
    pub fn reset(&mut self, len: usize) {
        self.current_page = 1;
        self.total_pages = total_pages(len, self.page_size);
    }

    pub fn set_page_size(&mut self, page_size: PageSize, len: usize) {
        self.page_size = page_size;
        self.reset(len);
    }

    /// Advance one page; returns `false` (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Step back one page; returns `false` (and stays put) on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Index range of the current page, clamped to `len`.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = ((self.current_page - 1) * size).min(len);
        let end = (start + size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.bounds(items.len())]
    }
}

/// `max(1, ceil(len / page_size))`
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}
