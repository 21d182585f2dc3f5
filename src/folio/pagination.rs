//! # Pagination State
//!
//! Tracks how many pages of the current filtered set have been revealed.
//!
//! The page counter starts at 1, is reset to 1 whenever the filtered set is
//! replaced, and only ever moves forward. It is never clamped: once every item
//! has been revealed the state is [`PageStatus::Exhausted`] and further advances
//! simply produce empty windows.

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Number of items revealed per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| FolioError::Config("page size must be at least 1".to_string()))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = FolioError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether the "show more" control has anything left to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    HasMore(usize),
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: PageSize,
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn advance(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    /// Items revealed so far out of `total`: `min(page * size, total)`.
    pub fn revealed(&self, total: usize) -> usize {
        self.current_page
            .saturating_mul(self.page_size.get())
            .min(total)
    }

    /// Index range of the newest page, clamped to `total`.
    pub fn window(&self, total: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.current_page - 1).saturating_mul(size).min(total);
        start..self.revealed(total)
    }

    /// Index range of every revealed item, clamped to `total`.
    pub fn prefix(&self, total: usize) -> Range<usize> {
        0..self.revealed(total)
    }

    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.current_page.saturating_mul(self.page_size.get()))
    }

    pub fn status(&self, total: usize) -> PageStatus {
        match self.remaining(total) {
            0 => PageStatus::Exhausted,
            n => PageStatus::HasMore(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(size: usize) -> PaginationState {
        PaginationState::new(PageSize::new(size).unwrap())
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(PageSize::new(0), Err(FolioError::Config(_))));
        assert_eq!(PageSize::default().get(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_size_deserializes_from_number() {
        let size: PageSize = serde_json::from_str("12").unwrap();
        assert_eq!(size.get(), 12);
        assert!(serde_json::from_str::<PageSize>("0").is_err());
    }

    #[test]
    fn windows_walk_forward_and_clamp() {
        let mut pages = state(10);
        assert_eq!(pages.window(25), 0..10);
        pages.advance();
        assert_eq!(pages.window(25), 10..20);
        pages.advance();
        assert_eq!(pages.window(25), 20..25);
        pages.advance();
        assert_eq!(pages.window(25), 25..25);
        assert_eq!(pages.prefix(25), 0..25);
    }

    #[test]
    fn remaining_never_goes_negative() {
        let mut pages = state(10);
        assert_eq!(pages.remaining(25), 15);
        assert_eq!(pages.status(25), PageStatus::HasMore(15));
        pages.advance();
        pages.advance();
        assert_eq!(pages.remaining(25), 0);
        pages.advance();
        assert_eq!(pages.remaining(25), 0);
        assert_eq!(pages.status(25), PageStatus::Exhausted);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut pages = state(3);
        pages.advance();
        pages.advance();
        assert_eq!(pages.current_page(), 3);
        pages.reset();
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn empty_set_is_exhausted_immediately() {
        let pages = state(5);
        assert_eq!(pages.window(0), 0..0);
        assert_eq!(pages.status(0), PageStatus::Exhausted);
    }
}
