//! # Dataset Layer
//!
//! The catalog is a fixed collection of [`BookRecord`]s plus three lookup
//! tables (authors, genres, themes). It is loaded once at startup and is
//! read-only for the lifetime of the process.
//!
//! The [`Dataset`] trait is the only thing the rest of the library needs:
//! - the engine reads [`Dataset::all_books`] once
//! - the preview renderer resolves author names
//! - the controller resolves themes and builds the option lists
//!
//! Lookups return `Option`: a record referencing an unknown author is valid
//! data, and consumers decide how to render the gap.
//!
//! ## Implementations
//!
//! - [`memory::StaticDataset`]: the in-memory catalog every loader produces
//! - [`json`]: parses and validates the JSON catalog format
//! - [`builtin`]: the catalog embedded in the binary

use crate::model::{AuthorId, BookRecord, GenreId};
use crate::theme::ThemeColors;

pub mod builtin;
pub mod json;
pub mod memory;

pub use memory::StaticDataset;

pub trait Dataset {
    /// Every record, in the stable order fixed at load time.
    fn all_books(&self) -> &[BookRecord];

    fn author_name(&self, id: &AuthorId) -> Option<&str>;

    fn genre_name(&self, id: &GenreId) -> Option<&str>;

    fn theme_colors(&self, name: &str) -> Option<ThemeColors>;

    /// All authors as `(id, name)`, ordered by display name.
    fn authors(&self) -> Vec<(&AuthorId, &str)>;

    /// All genres as `(id, name)`, ordered by display name.
    fn genres(&self) -> Vec<(&GenreId, &str)>;

    /// All themes as `(name, colors)`, ordered by name.
    fn themes(&self) -> Vec<(&str, ThemeColors)>;
}
