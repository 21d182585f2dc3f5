//! # API Facade
//!
//! A thin facade over the command layer for one-shot queries. It normalizes raw
//! inputs (form strings into [`FilterCriteria`], ids into [`BookId`]) and returns
//! structured [`CmdResult`]s. It never prints.
//!
//! Interactive browsing goes through [`crate::controller::Browser`] instead;
//! both read the same [`Dataset`].

use crate::commands;
use crate::config::FolioConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::model::BookId;

/// Entry point for catalog queries, generic over the dataset backend.
pub struct FolioApi<D: Dataset> {
    dataset: D,
    config: FolioConfig,
}

impl<D: Dataset> FolioApi<D> {
    pub fn new(dataset: D, config: FolioConfig) -> Self {
        Self { dataset, config }
    }

    pub fn list_books(&self, criteria: &FilterCriteria, pages: usize) -> Result<CmdResult> {
        commands::list::run(&self.dataset, criteria, self.config.page_size, pages)
    }

    /// Same as [`FolioApi::list_books`] but from raw form values.
    pub fn search(&self, title: &str, author: &str, genre: &str, pages: usize) -> Result<CmdResult> {
        self.list_books(&FilterCriteria::from_form(title, author, genre), pages)
    }

    pub fn show_book(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.dataset, &BookId::new(id.trim()))
    }

    pub fn authors(&self) -> Result<CmdResult> {
        commands::options::authors(&self.dataset)
    }

    pub fn genres(&self) -> Result<CmdResult> {
        commands::options::genres(&self.dataset)
    }

    pub fn themes(&self) -> Result<CmdResult> {
        commands::themes::run(&self.dataset)
    }

    pub fn config(&self) -> Result<CmdResult> {
        Ok(CmdResult::default().with_config(self.config.clone()))
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn settings(&self) -> &FolioConfig {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, ThemeEntry, NO_RESULTS};
