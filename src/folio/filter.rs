//! # Filter Criteria
//!
//! A [`FilterCriteria`] is built fresh from the search form on every submission
//! and evaluated against each [`BookRecord`] by three independent predicates.
//! A record is included only when all three hold:
//!
//! - **title**: empty query, or the case-folded title contains the case-folded query
//! - **author**: [`Selection::Any`], or the record's author equals the selected one
//! - **genre**: [`Selection::Any`], or the selected genre is one of the record's genres

use crate::model::{AuthorId, BookRecord, GenreId};
use std::fmt;

/// Form value used for "no restriction" in the author and genre selects.
pub const ANY: &str = "any";

/// Either the "any" sentinel or one specific id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T> Selection<T> {
    /// Parses a raw form value. `"any"` and blank input mean no restriction.
    pub fn from_form(raw: &str) -> Self
    where
        T: for<'a> From<&'a str>,
    {
        let raw = raw.trim();
        if raw.is_empty() || raw == ANY {
            Selection::Any
        } else {
            Selection::Only(T::from(raw))
        }
    }

}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Any => f.write_str(ANY),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Stored case-folded and trimmed.
    title_query: String,
    pub author: Selection<AuthorId>,
    pub genre: Selection<GenreId>,
}

impl FilterCriteria {
    /// Criteria matching every record.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn new(title: &str, author: Selection<AuthorId>, genre: Selection<GenreId>) -> Self {
        Self {
            title_query: title.trim().to_lowercase(),
            author,
            genre,
        }
    }

    /// Builds criteria from the three raw search-form fields.
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self::new(
            title,
            Selection::from_form(author),
            Selection::from_form(genre),
        )
    }

    pub fn title_query(&self) -> &str {
        &self.title_query
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title_query = title.trim().to_lowercase();
        self
    }

    pub fn with_author(mut self, author: impl Into<AuthorId>) -> Self {
        self.author = Selection::Only(author.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<GenreId>) -> Self {
        self.genre = Selection::Only(genre.into());
        self
    }

    pub fn title_matches(&self, book: &BookRecord) -> bool {
        self.title_query.is_empty() || book.title.to_lowercase().contains(&self.title_query)
    }

    pub fn author_matches(&self, book: &BookRecord) -> bool {
        match &self.author {
            Selection::Any => true,
            Selection::Only(author) => &book.author == author,
        }
    }

    pub fn genre_matches(&self, book: &BookRecord) -> bool {
        match &self.genre {
            Selection::Any => true,
            Selection::Only(genre) => book.has_genre(genre),
        }
    }

    pub fn matches(&self, book: &BookRecord) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::memory::fixtures::book;

    #[test]
    fn empty_query_matches_every_title() {
        let criteria = FilterCriteria::any();
        assert!(criteria.matches(&book("1", "Anything", "a1", &[])));
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let criteria = FilterCriteria::any().with_title("  DUNE ");
        assert_eq!(criteria.title_query(), "dune");
        assert!(criteria.title_matches(&book("1", "Dune Messiah", "a1", &[])));
        assert!(criteria.title_matches(&book("2", "children of dune", "a1", &[])));
        assert!(!criteria.title_matches(&book("3", "Dun", "a1", &[])));
    }

    #[test]
    fn author_must_match_exactly() {
        let criteria = FilterCriteria::any().with_author("a1");
        assert!(criteria.author_matches(&book("1", "T", "a1", &[])));
        assert!(!criteria.author_matches(&book("2", "T", "a10", &[])));
    }

    #[test]
    fn genre_must_be_a_member() {
        let criteria = FilterCriteria::any().with_genre("g2");
        assert!(criteria.genre_matches(&book("1", "T", "a1", &["g1", "g2"])));
        assert!(!criteria.genre_matches(&book("2", "T", "a1", &["g1"])));
        assert!(!criteria.genre_matches(&book("3", "T", "a1", &[])));
    }

    #[test]
    fn predicates_combine_with_and() {
        let criteria = FilterCriteria::any()
            .with_title("war")
            .with_author("a1")
            .with_genre("g1");
        assert!(criteria.matches(&book("1", "War and Peace", "a1", &["g1"])));
        assert!(!criteria.matches(&book("2", "War and Peace", "a2", &["g1"])));
        assert!(!criteria.matches(&book("3", "War and Peace", "a1", &["g2"])));
        assert!(!criteria.matches(&book("4", "Peace", "a1", &["g1"])));
    }

    #[test]
    fn form_values_any_and_blank_are_unrestricted() {
        let criteria = FilterCriteria::from_form("", "any", " ");
        assert_eq!(criteria, FilterCriteria::any());

        let criteria = FilterCriteria::from_form("x", "a1", "g1");
        assert_eq!(criteria.author, Selection::Only(AuthorId::from("a1")));
        assert_eq!(criteria.genre.to_string(), "g1");
    }
}
