//! # Event Controller
//!
//! [`Browser`] connects UI events to the engine and pushes the results into a
//! [`View`]. It owns the [`PageEngine`] outright; nothing else can mutate the
//! filtered set or the page counter, and every event runs to completion before
//! the next one is handled.
//!
//! Events that reference something that does not exist (an unknown book id, an
//! unknown theme) or that come from a disabled control are ignored without any
//! visible error. [`EventOutcome`] reports which happened.

use crate::dataset::Dataset;
use crate::engine::PageEngine;
use crate::error::{FolioError, Result};
use crate::filter::{FilterCriteria, ANY};
use crate::model::BookId;
use crate::pagination::PageSize;
use crate::preview::{create_previews, BookDetail};
use crate::theme::{ColorScheme, ThemeColors};
use crate::view::{SelectOption, View};

pub const ALL_AUTHORS: &str = "All Authors";
pub const ALL_GENRES: &str = "All Genres";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    OpenSearch,
    CancelSearch,
    SubmitSearch(FilterCriteria),
    OpenSettings,
    CancelSettings,
    SubmitSettings { theme: String },
    ShowMore,
    ActivateItem(BookId),
    CloseDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct BrowserOptions {
    pub page_size: PageSize,
    /// Explicit theme; overrides the system preference.
    pub theme: Option<String>,
    pub scheme: ColorScheme,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            theme: None,
            scheme: ColorScheme::Light,
        }
    }
}

pub struct Browser<'d, D: Dataset + ?Sized, V: View> {
    dataset: &'d D,
    engine: PageEngine,
    view: V,
    theme: String,
}

impl<'d, D: Dataset + ?Sized, V: View> Browser<'d, D, V> {
    /// Populates the form options, applies the initial theme and renders page 1.
    pub fn start(dataset: &'d D, mut view: V, options: BrowserOptions) -> Result<Self> {
        let (theme, colors) = resolve_theme(dataset, options.theme.as_deref(), options.scheme)?;

        view.set_genre_options(genre_options(dataset));
        view.set_author_options(author_options(dataset));
        view.set_theme_value(&theme);
        view.apply_colors(colors);

        let engine = PageEngine::new(dataset.all_books().to_vec(), options.page_size);
        let mut browser = Self {
            dataset,
            engine,
            view,
            theme,
        };
        browser.render_page();
        tracing::debug!(
            books = browser.engine.matched(),
            theme = %browser.theme,
            "browser started"
        );
        Ok(browser)
    }

    pub fn handle(&mut self, event: UiEvent) -> EventOutcome {
        let outcome = match event {
            UiEvent::OpenSearch => {
                self.view.set_search_open(true);
                EventOutcome::Applied
            }
            UiEvent::CancelSearch => {
                self.view.set_search_open(false);
                self.view.reset_search_form();
                EventOutcome::Applied
            }
            UiEvent::SubmitSearch(criteria) => self.submit_search(&criteria),
            UiEvent::OpenSettings => {
                self.view.set_settings_open(true);
                EventOutcome::Applied
            }
            UiEvent::CancelSettings => {
                self.view.set_settings_open(false);
                EventOutcome::Applied
            }
            UiEvent::SubmitSettings { theme } => self.submit_theme(theme),
            UiEvent::ShowMore => self.show_more(),
            UiEvent::ActivateItem(id) => self.activate(&id),
            UiEvent::CloseDetail => {
                self.view.close_detail();
                EventOutcome::Applied
            }
        };
        if outcome == EventOutcome::Ignored {
            tracing::debug!("event ignored");
        }
        outcome
    }

    fn submit_search(&mut self, criteria: &FilterCriteria) -> EventOutcome {
        let outcome = self.engine.apply_filter(criteria);
        self.view.set_message_visible(outcome.show_empty_message);
        self.view.clear_items();
        self.render_page();
        self.view.scroll_to_top();
        self.view.set_search_open(false);
        self.view.reset_search_form();
        EventOutcome::Applied
    }

    fn submit_theme(&mut self, theme: String) -> EventOutcome {
        let Some(colors) = self.dataset.theme_colors(&theme) else {
            tracing::debug!(theme = %theme, "unknown theme");
            return EventOutcome::Ignored;
        };
        self.view.apply_colors(colors);
        self.view.set_theme_value(&theme);
        self.view.set_settings_open(false);
        self.theme = theme;
        EventOutcome::Applied
    }

    fn show_more(&mut self) -> EventOutcome {
        if !self.engine.load_more().enabled {
            return EventOutcome::Ignored;
        }
        self.engine.advance_page();
        self.render_page();
        EventOutcome::Applied
    }

    fn activate(&mut self, id: &BookId) -> EventOutcome {
        let Some(book) = self.engine.find(id) else {
            tracing::debug!(id = %id, "activation does not map to a book");
            return EventOutcome::Ignored;
        };
        let detail = BookDetail::for_book(book, self.dataset);
        self.view.open_detail(detail);
        EventOutcome::Applied
    }

    /// Appends the newest slice and refreshes the load-more control.
    fn render_page(&mut self) {
        let previews = create_previews(self.engine.visible_slice(), self.dataset);
        self.view.append_items(previews);
        self.view.set_load_more(self.engine.load_more());
    }

    pub fn engine(&self) -> &PageEngine {
        &self.engine
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

/// The explicit theme if given, else the one matching the system scheme.
pub fn resolve_theme<D: Dataset + ?Sized>(
    dataset: &D,
    explicit: Option<&str>,
    scheme: ColorScheme,
) -> Result<(String, ThemeColors)> {
    let theme = explicit.unwrap_or_else(|| scheme.theme_name());
    let colors = dataset
        .theme_colors(theme)
        .ok_or_else(|| FolioError::Config(format!("unknown theme \"{}\"", theme)))?;
    Ok((theme.to_string(), colors))
}

pub fn author_options<D: Dataset + ?Sized>(dataset: &D) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ANY, ALL_AUTHORS))
        .chain(
            dataset
                .authors()
                .into_iter()
                .map(|(id, name)| SelectOption::new(id.as_str(), name)),
        )
        .collect()
}

pub fn genre_options<D: Dataset + ?Sized>(dataset: &D) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ANY, ALL_GENRES))
        .chain(
            dataset
                .genres()
                .into_iter()
                .map(|(id, name)| SelectOption::new(id.as_str(), name)),
        )
        .collect()
}
