//! # JSON Catalog Format
//!
//! ```json
//! {
//!   "books":   [{ "id", "title", "author", "genres", "image", "published", "description" }],
//!   "authors": { "<author id>": "<display name>" },
//!   "genres":  { "<genre id>": "<display name>" },
//!   "themes":  { "day": { "dark": "10, 10, 20", "light": "255, 255, 255" }, "night": { ... } }
//! }
//! ```
//!
//! Loading refuses to produce a dataset from corrupt input: a file that does not
//! parse (e.g. `books` is not a sequence), duplicate book ids, or a theme table
//! without `day` and `night` are all [`FolioError::Dataset`].
//! References to unknown authors or genres are tolerated and only logged.

use super::memory::StaticDataset;
use super::Dataset;
use crate::error::{FolioError, Result};
use crate::model::BookRecord;
use crate::theme::ThemeTable;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    books: Vec<BookRecord>,
    #[serde(default)]
    authors: BTreeMap<String, String>,
    #[serde(default)]
    genres: BTreeMap<String, String>,
    themes: ThemeTable,
}

pub fn from_str(source: &str) -> Result<StaticDataset> {
    let file: CatalogFile = serde_json::from_str(source)
        .map_err(|e| FolioError::Dataset(format!("malformed catalog: {}", e)))?;
    build(file)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<StaticDataset> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        FolioError::Dataset(format!("cannot read catalog {}: {}", path.display(), e))
    })?;
    let dataset = from_str(&content)?;
    tracing::info!(path = %path.display(), books = dataset.all_books().len(), "catalog loaded");
    Ok(dataset)
}

fn build(file: CatalogFile) -> Result<StaticDataset> {
    file.themes.validate()?;

    let mut seen = HashSet::new();
    for book in &file.books {
        if !seen.insert(book.id.as_str()) {
            return Err(FolioError::Dataset(format!(
                "duplicate book id \"{}\"",
                book.id
            )));
        }
    }

    let dangling_authors = file
        .books
        .iter()
        .filter(|b| !file.authors.contains_key(b.author.as_str()))
        .count();
    let dangling_genres = file
        .books
        .iter()
        .flat_map(|b| b.genres.iter())
        .filter(|g| !file.genres.contains_key(g.as_str()))
        .count();
    if dangling_authors > 0 || dangling_genres > 0 {
        tracing::warn!(
            dangling_authors,
            dangling_genres,
            "catalog references unknown authors or genres"
        );
    }

    let mut dataset = StaticDataset::new()
        .with_books(file.books)
        .with_themes(file.themes);
    for (id, name) in &file.authors {
        dataset = dataset.with_author(id, name);
    }
    for (id, name) in &file.genres {
        dataset = dataset.with_genre(id, name);
    }
    Ok(dataset)
}
