use crate::commands::{CmdMessage, CmdResult, NO_RESULTS};
use crate::dataset::Dataset;
use crate::engine::PageEngine;
use crate::error::{FolioError, Result};
use crate::filter::FilterCriteria;
use crate::pagination::PageSize;
use crate::preview::create_previews;

/// Filters the catalog and reveals the first `pages` pages of the result.
pub fn run<D: Dataset + ?Sized>(
    dataset: &D,
    criteria: &FilterCriteria,
    page_size: PageSize,
    pages: usize,
) -> Result<CmdResult> {
    if pages == 0 {
        return Err(FolioError::Api("pages must be at least 1".to_string()));
    }

    let mut engine = PageEngine::new(dataset.all_books().to_vec(), page_size);
    let outcome = engine.apply_filter(criteria);
    for _ in 1..pages {
        if engine.remaining_count() == 0 {
            break;
        }
        engine.advance_page();
    }

    let listed = create_previews(engine.visible_prefix(), dataset);
    let mut result = CmdResult::default()
        .with_listed_books(listed)
        .with_load_more(engine.load_more());
    if outcome.show_empty_message {
        result.add_message(CmdMessage::info(NO_RESULTS));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::memory::fixtures::DatasetFixture;
    use crate::engine::LoadMore;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn lists_first_page_with_remaining_count() {
        let dataset = DatasetFixture::new().with_books(25).build();
        let result = run(&dataset, &FilterCriteria::any(), size(10), 1).unwrap();
        assert_eq!(result.listed_books.len(), 10);
        assert_eq!(result.load_more, Some(LoadMore { remaining: 15, enabled: true }));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lists_every_revealed_page() {
        let dataset = DatasetFixture::new().with_books(25).build();
        let result = run(&dataset, &FilterCriteria::any(), size(10), 2).unwrap();
        assert_eq!(result.listed_books.len(), 20);
        assert_eq!(result.listed_books[19].title, "Book 20");

        let result = run(&dataset, &FilterCriteria::any(), size(10), 9).unwrap();
        assert_eq!(result.listed_books.len(), 25);
        assert_eq!(result.load_more.map(|l| l.enabled), Some(false));
    }

    #[test]
    fn empty_result_adds_message() {
        let dataset = DatasetFixture::new().with_books(3).build();
        let criteria = FilterCriteria::any().with_genre("g2");
        let result = run(&dataset, &criteria, size(10), 1).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info(NO_RESULTS)]);
    }

    #[test]
    fn lists_with_huge_page_count() {
        let dataset = DatasetFixture::new().with_books(25).build();
        let result = run(&dataset, &FilterCriteria::any(), size(10), usize::MAX).unwrap();
        assert_eq!(result.listed_books.len(), 25);
        assert_eq!(result.load_more, Some(LoadMore { remaining: 0, enabled: false }));
    }

    #[test]
    fn zero_pages_is_rejected() {
        let dataset = DatasetFixture::new().build();
        assert!(run(&dataset, &FilterCriteria::any(), size(10), 0).is_err());
    }
}
