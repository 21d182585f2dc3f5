//! Display units built from [`BookRecord`]s.
//!
//! A [`Preview`] is one clickable list entry; its `id` is the tag a later
//! activation maps back to a record. A [`BookDetail`] fills the detail overlay.

use crate::dataset::Dataset;
use crate::model::{BookId, BookRecord};
use serde::Serialize;

pub const UNKNOWN_AUTHOR: &str = "Unknown author";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub id: BookId,
    pub title: String,
    pub author: Option<String>,
    pub image: String,
}

impl Preview {
    pub fn author_or_unknown(&self) -> &str {
        self.author.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

pub fn create_preview<D: Dataset + ?Sized>(book: &BookRecord, dataset: &D) -> Preview {
    Preview {
        id: book.id.clone(),
        title: book.title.clone(),
        author: dataset.author_name(&book.author).map(str::to_string),
        image: book.image.clone(),
    }
}

pub fn create_previews<'a, D, I>(books: I, dataset: &D) -> Vec<Preview>
where
    D: Dataset + ?Sized,
    I: IntoIterator<Item = &'a BookRecord>,
{
    books
        .into_iter()
        .map(|book| create_preview(book, dataset))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    pub id: BookId,
    pub image: String,
    /// Background image behind the overlay; the cover itself.
    pub blur: String,
    pub title: String,
    /// `"{author} ({year})"`
    pub subtitle: String,
    pub description: String,
    pub genres: Vec<String>,
}

impl BookDetail {
    pub fn for_book<D: Dataset + ?Sized>(book: &BookRecord, dataset: &D) -> Self {
        let author = dataset.author_name(&book.author).unwrap_or(UNKNOWN_AUTHOR);
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            blur: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author, book.published_year()),
            description: book.description.clone(),
            genres: book
                .genres
                .iter()
                .filter_map(|g| dataset.genre_name(g))
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::memory::fixtures::{book, DatasetFixture};

    #[test]
    fn preview_carries_id_and_author_name() {
        let dataset = DatasetFixture::new().build();
        let preview = create_preview(&book("b1", "Dune", "a1", &[]), &dataset);
        assert_eq!(preview.id, BookId::from("b1"));
        assert_eq!(preview.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(preview.image, "https://covers.example/b1.jpg");
    }

    #[test]
    fn missing_author_is_explicit() {
        let dataset = DatasetFixture::new().build();
        let preview = create_preview(&book("b1", "Dune", "nobody", &[]), &dataset);
        assert_eq!(preview.author, None);
        assert_eq!(preview.author_or_unknown(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn detail_subtitle_has_author_and_year() {
        let dataset = DatasetFixture::new().build();
        let detail = BookDetail::for_book(&book("b1", "Dune", "a1", &["g1", "gx"]), &dataset);
        assert_eq!(detail.subtitle, "Frank Herbert (2001)");
        assert_eq!(detail.blur, detail.image);
        assert_eq!(detail.genres, vec!["Science Fiction"]);

        let detail = BookDetail::for_book(&book("b2", "Orphan", "zz", &[]), &dataset);
        assert_eq!(detail.subtitle, "Unknown author (2001)");
    }
}
