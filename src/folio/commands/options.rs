use crate::commands::CmdResult;
use crate::controller::{author_options, genre_options};
use crate::dataset::Dataset;
use crate::error::Result;

pub fn authors<D: Dataset + ?Sized>(dataset: &D) -> Result<CmdResult> {
    Ok(CmdResult::default().with_options(author_options(dataset)))
}

pub fn genres<D: Dataset + ?Sized>(dataset: &D) -> Result<CmdResult> {
    Ok(CmdResult::default().with_options(genre_options(dataset)))
}
