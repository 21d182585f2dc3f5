//! # View Bindings
//!
//! The [`View`] trait names every UI region the controller writes to. A view is a
//! pure conduit: it holds no browsing logic and never decides what to show.
//!
//! Regions:
//! - list container (cleared, then append-only)
//! - load-more control (label and enabled flag)
//! - empty-result message (visible or hidden)
//! - author and genre option lists of the search form
//! - detail overlay (fields, open or closed)
//! - search overlay (open or closed, resettable form)
//! - settings overlay (open or closed, selected theme)
//! - the two theme color variables
//!
//! [`ViewState`] implements the trait in memory and records the current state of
//! each region. Tests drive the controller against it; terminal clients wrap it.

use crate::engine::LoadMore;
use crate::preview::{BookDetail, Preview};
use crate::theme::ThemeColors;
use serde::Serialize;

/// One entry of a `<select>`-style option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub trait View {
    fn clear_items(&mut self);

    fn append_items(&mut self, items: Vec<Preview>);

    fn set_load_more(&mut self, control: LoadMore);

    fn set_message_visible(&mut self, visible: bool);

    fn set_author_options(&mut self, options: Vec<SelectOption>);

    fn set_genre_options(&mut self, options: Vec<SelectOption>);

    fn open_detail(&mut self, detail: BookDetail);

    fn close_detail(&mut self);

    fn set_search_open(&mut self, open: bool);

    fn reset_search_form(&mut self);

    fn set_settings_open(&mut self, open: bool);

    /// Selects a theme in the settings form.
    fn set_theme_value(&mut self, name: &str);

    /// Applies the two color variables.
    fn apply_colors(&mut self, colors: ThemeColors);

    fn scroll_to_top(&mut self) {}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub items: Vec<Preview>,
    pub load_more: Option<LoadMore>,
    pub message_visible: bool,
    pub author_options: Vec<SelectOption>,
    pub genre_options: Vec<SelectOption>,
    pub detail: Option<BookDetail>,
    pub detail_open: bool,
    pub search_open: bool,
    /// Incremented on each form reset.
    pub search_resets: usize,
    pub settings_open: bool,
    pub theme_value: Option<String>,
    pub colors: Option<ThemeColors>,
    pub scrolls_to_top: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|p| p.id.as_str()).collect()
    }
}

impl View for ViewState {
    fn clear_items(&mut self) {
        self.items.clear();
    }

    fn append_items(&mut self, items: Vec<Preview>) {
        self.items.extend(items);
    }

    fn set_load_more(&mut self, control: LoadMore) {
        self.load_more = Some(control);
    }

    fn set_message_visible(&mut self, visible: bool) {
        self.message_visible = visible;
    }

    fn set_author_options(&mut self, options: Vec<SelectOption>) {
        self.author_options = options;
    }

    fn set_genre_options(&mut self, options: Vec<SelectOption>) {
        self.genre_options = options;
    }

    fn open_detail(&mut self, detail: BookDetail) {
        self.detail = Some(detail);
        self.detail_open = true;
    }

    fn close_detail(&mut self) {
        self.detail_open = false;
    }

    fn set_search_open(&mut self, open: bool) {
        self.search_open = open;
    }

    fn reset_search_form(&mut self) {
        self.search_resets += 1;
    }

    fn set_settings_open(&mut self, open: bool) {
        self.settings_open = open;
    }

    fn set_theme_value(&mut self, name: &str) {
        self.theme_value = Some(name.to_string());
    }

    fn apply_colors(&mut self, colors: ThemeColors) {
        self.colors = Some(colors);
    }

    fn scroll_to_top(&mut self) {
        self.scrolls_to_top += 1;
    }
}
