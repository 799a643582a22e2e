//! Fixed-size paging over the photo collection.
//!
//! The pager only ever moves through its guarded transitions, which is what
//! keeps `1 <= current_page <= total_pages` true. Nothing clamps the page
//! number after the fact.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_pages: usize,
    page_size: usize,
}

impl Pager {
    /// Starts on page 1. Returns `None` when there is nothing to page, so a
    /// zero-page pager never exists.
    pub fn new(photo_count: usize, page_size: usize) -> Option<Self> {
        if page_size == 0 {
            return None;
        }
        let total_pages = photo_count.div_ceil(page_size);
        if total_pages == 0 {
            return None;
        }
        Some(Self {
            current_page: 1,
            total_pages,
            page_size,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn go_previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Jumps to a numbered page. Returns `true` only if the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn controls(&self, button_count: usize) -> PagerControls {
        PagerControls {
            previous_disabled: self.current_page == 1,
            next_disabled: self.current_page >= self.total_pages,
            pages: (1..=button_count)
                .map(|number| PageControl {
                    number,
                    visible: number <= self.total_pages,
                    active: number == self.current_page,
                })
                .collect(),
        }
    }
}

/// Index range of a 1-based page, before clipping to the collection.
/// Page 0 has no photos.
pub fn page_range(page: usize, page_size: usize) -> Range<usize> {
    match page.checked_sub(1) {
        Some(offset) => offset * page_size..page * page_size,
        None => 0..0,
    }
}

/// The photos shown on `page`. Out-of-range pages give an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let range = page_range(page, page_size);
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    &items[start..end]
}

/// What the pagination group should look like.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PagerControls {
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub pages: Vec<PageControl>,
}

impl PagerControls {
    pub fn active_page(&self) -> Option<usize> {
        self.pages.iter().find(|p| p.active).map(|p| p.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: usize,
    pub visible: bool,
    pub active: bool,
}
