//! # Pagination & Filter Engine
//!
//! [`PageEngine`] owns the two pieces of mutable browsing state:
//!
//! - the **filtered set**: the records matching the last applied
//!   [`FilterCriteria`], in dataset order (the full dataset before any filter)
//! - the **pagination state**: how many pages of that set have been revealed
//!
//! ## Rendering Contract
//!
//! Rendering is append-only within one filtered set. After construction or
//! [`PageEngine::apply_filter`] the caller clears whatever it rendered and
//! appends [`PageEngine::visible_slice`]. After each
//! [`PageEngine::advance_page`] it appends the next `visible_slice`, which
//! never repeats an item. The number of rendered items therefore always equals
//! `min(current_page * page_size, matched)`.
//!
//! The "show more" control reads [`PageEngine::load_more`]: it is disabled
//! exactly when [`PageEngine::remaining_count`] is zero.

use crate::filter::FilterCriteria;
use crate::model::{BookId, BookRecord};
use crate::pagination::{PageSize, PageStatus, PaginationState};
use serde::Serialize;

/// What a filter submission signals to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub matched: usize,
    /// Toggle for the "no results" message region.
    pub show_empty_message: bool,
}

/// State of the "show more" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadMore {
    pub remaining: usize,
    pub enabled: bool,
}

impl LoadMore {
    pub fn from_remaining(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }

    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

#[derive(Debug, Clone)]
pub struct PageEngine {
    books: Vec<BookRecord>,
    /// Indices into `books`, ascending.
    filtered: Vec<usize>,
    pagination: PaginationState,
}

impl PageEngine {
    /// Starts on page 1 of the unfiltered dataset.
    pub fn new(books: Vec<BookRecord>, page_size: PageSize) -> Self {
        let filtered = (0..books.len()).collect();
        Self {
            books,
            filtered,
            pagination: PaginationState::new(page_size),
        }
    }

    /// Replaces the filtered set and resets to page 1.
    pub fn apply_filter(&mut self, criteria: &FilterCriteria) -> FilterOutcome {
        self.filtered = self
            .books
            .iter()
            .enumerate()
            .filter(|(_, book)| criteria.matches(book))
            .map(|(i, _)| i)
            .collect();
        self.pagination.reset();

        let matched = self.filtered.len();
        tracing::debug!(
            title = criteria.title_query(),
            author = %criteria.author,
            genre = %criteria.genre,
            matched,
            "filter applied"
        );
        FilterOutcome {
            matched,
            show_empty_message: matched == 0,
        }
    }

    /// The newest page only: `[(page - 1) * size, page * size)`, clamped.
    pub fn visible_slice(&self) -> Vec<&BookRecord> {
        self.resolve(self.pagination.window(self.filtered.len()))
    }

    /// Everything revealed so far: `[0, page * size)`, clamped.
    pub fn visible_prefix(&self) -> Vec<&BookRecord> {
        self.resolve(self.pagination.prefix(self.filtered.len()))
    }

    /// Moves to the next page. Past the end this yields empty slices.
    pub fn advance_page(&mut self) {
        self.pagination.advance();
        tracing::debug!(page = self.pagination.current_page(), "page advanced");
    }

    pub fn remaining_count(&self) -> usize {
        self.pagination.remaining(self.filtered.len())
    }

    pub fn status(&self) -> PageStatus {
        self.pagination.status(self.filtered.len())
    }

    pub fn load_more(&self) -> LoadMore {
        LoadMore::from_remaining(self.remaining_count())
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> PageSize {
        self.pagination.page_size()
    }

    /// Size of the filtered set.
    pub fn matched(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &BookRecord> {
        self.filtered.iter().map(|&i| &self.books[i])
    }

    /// Maps an activation id back to its record, searching the full dataset.
    pub fn find(&self, id: &BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| &book.id == id)
    }

    fn resolve(&self, range: std::ops::Range<usize>) -> Vec<&BookRecord> {
        self.filtered[range].iter().map(|&i| &self.books[i]).collect()
    }
}
