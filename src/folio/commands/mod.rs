use crate::config::FolioConfig;
use crate::engine::LoadMore;
use crate::preview::{BookDetail, Preview};
use crate::theme::ThemeColors;
use crate::view::SelectOption;

pub mod list;
pub mod options;
pub mod show;
pub mod themes;

pub const NO_RESULTS: &str = "No results found. Your filters might be too narrow.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_books: Vec<Preview>,
    pub detail: Option<BookDetail>,
    pub options: Vec<SelectOption>,
    pub themes: Vec<ThemeEntry>,
    pub load_more: Option<LoadMore>,
    pub config: Option<FolioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<Preview>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_detail(mut self, detail: BookDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_themes(mut self, themes: Vec<ThemeEntry>) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_load_more(mut self, load_more: LoadMore) -> Self {
        self.load_more = Some(load_more);
        self
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }
}
