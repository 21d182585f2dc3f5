use crate::commands::{CmdMessage, CmdResult};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::model::BookId;
use crate::preview::BookDetail;

pub fn run<D: Dataset + ?Sized>(dataset: &D, id: &BookId) -> Result<CmdResult> {
    let Some(book) = dataset.all_books().iter().find(|b| &b.id == id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("No book with id {}", id)));
        return Ok(result);
    };
    Ok(CmdResult::default().with_detail(BookDetail::for_book(book, dataset)))
}
