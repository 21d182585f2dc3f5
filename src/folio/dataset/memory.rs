use super::Dataset;
use crate::model::{AuthorId, BookRecord, GenreId};
use crate::theme::{ThemeColors, ThemeTable};
use std::collections::BTreeMap;

/// In-memory catalog. Built by the loaders, or directly in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDataset {
    books: Vec<BookRecord>,
    authors: BTreeMap<AuthorId, String>,
    genres: BTreeMap<GenreId, String>,
    themes: ThemeTable,
}

impl StaticDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, book: BookRecord) -> Self {
        self.books.push(book);
        self
    }

    pub fn with_books(mut self, books: impl IntoIterator<Item = BookRecord>) -> Self {
        self.books.extend(books);
        self
    }

    pub fn with_author(mut self, id: &str, name: &str) -> Self {
        self.authors.insert(AuthorId::new(id), name.to_string());
        self
    }

    pub fn with_genre(mut self, id: &str, name: &str) -> Self {
        self.genres.insert(GenreId::new(id), name.to_string());
        self
    }

    pub fn with_theme(mut self, name: &str, colors: ThemeColors) -> Self {
        self.themes = self.themes.add(name, colors);
        self
    }

    pub fn with_themes(mut self, themes: ThemeTable) -> Self {
        self.themes = themes;
        self
    }
}

fn by_name<'a, K>(table: &'a BTreeMap<K, String>) -> Vec<(&'a K, &'a str)> {
    let mut entries: Vec<_> = table.iter().map(|(k, v)| (k, v.as_str())).collect();
    entries.sort_by(|a, b| a.1.cmp(b.1));
    entries
}

impl Dataset for StaticDataset {
    fn all_books(&self) -> &[BookRecord] {
        &self.books
    }

    fn author_name(&self, id: &AuthorId) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    fn genre_name(&self, id: &GenreId) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    fn theme_colors(&self, name: &str) -> Option<ThemeColors> {
        self.themes.get(name)
    }

    fn authors(&self) -> Vec<(&AuthorId, &str)> {
        by_name(&self.authors)
    }

    fn genres(&self) -> Vec<(&GenreId, &str)> {
        by_name(&self.genres)
    }

    fn themes(&self) -> Vec<(&str, ThemeColors)> {
        self.themes.iter().collect()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::theme::{day_colors, night_colors, DAY, NIGHT};
    use chrono::{TimeZone, Utc};

    /// A record with placeholder image, date and description.
    pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> BookRecord {
        BookRecord {
            id: id.into(),
            title: title.to_string(),
            author: author.into(),
            genres: genres.iter().map(|g| GenreId::new(*g)).collect(),
            image: format!("https://covers.example/{}.jpg", id),
            published: Utc
                .with_ymd_and_hms(2001, 6, 15, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            description: format!("About {}", title),
        }
    }

    pub struct DatasetFixture {
        pub dataset: StaticDataset,
    }

    impl Default for DatasetFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DatasetFixture {
        /// Two authors, two genres and the day/night themes; no books.
        pub fn new() -> Self {
            Self {
                dataset: StaticDataset::new()
                    .with_author("a1", "Frank Herbert")
                    .with_author("a2", "Ursula K. Le Guin")
                    .with_genre("g1", "Science Fiction")
                    .with_genre("g2", "Fantasy")
                    .with_theme(DAY, day_colors())
                    .with_theme(NIGHT, night_colors()),
            }
        }

        /// Adds `count` books titled "Book 1".."Book N", alternating authors.
        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let author = if i % 2 == 0 { "a1" } else { "a2" };
                let title = format!("Book {}", i + 1);
                self.dataset = self
                    .dataset
                    .with_book(book(&format!("b{}", i + 1), &title, author, &["g1"]));
            }
            self
        }

        pub fn with_book(mut self, id: &str, title: &str, author: &str, genres: &[&str]) -> Self {
            self.dataset = self.dataset.with_book(book(id, title, author, genres));
            self
        }

        pub fn build(self) -> StaticDataset {
            self.dataset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::DatasetFixture;
    use super::*;

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let dataset = DatasetFixture::new().build();
        assert_eq!(
            dataset.author_name(&AuthorId::from("a1")),
            Some("Frank Herbert")
        );
        assert_eq!(dataset.author_name(&AuthorId::from("zz")), None);
        assert_eq!(dataset.genre_name(&GenreId::from("zz")), None);
        assert_eq!(dataset.theme_colors("sepia"), None);
    }

    #[test]
    fn options_are_ordered_by_display_name() {
        let dataset = StaticDataset::new()
            .with_genre("g1", "Thriller")
            .with_genre("g2", "Drama")
            .with_genre("g3", "Horror");
        let names: Vec<&str> = dataset.genres().into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Drama", "Horror", "Thriller"]);
    }

    #[test]
    fn books_keep_insertion_order() {
        let dataset = DatasetFixture::new().with_books(3).build();
        let ids: Vec<&str> = dataset.all_books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3"]);
    }
}
