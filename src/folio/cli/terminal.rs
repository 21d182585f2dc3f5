//! # Terminal Browser
//!
//! Line-oriented rendition of the browsing UI. [`TerminalView`] implements
//! [`View`] by recording state in a [`ViewState`] and printing each region as
//! it changes: appended items are printed below the previous page, overlays
//! print their form when they open.
//!
//! Input is one command per line (see [`HELP_ENTRIES`]). Form fields live in
//! the view, as they would in a page's form elements; the session loop turns
//! `submit` and `cancel` into controller events depending on which overlay is
//! open.

use super::render::{
    render_book_list, render_detail, render_help, render_load_more, render_messages,
    render_options, render_search_form, render_settings, Renderer,
};
use folio::api::{CmdMessage, NO_RESULTS};
use folio::controller::{Browser, UiEvent};
use folio::dataset::Dataset;
use folio::engine::LoadMore;
use folio::error::Result;
use folio::filter::{FilterCriteria, ANY};
use folio::model::BookId;
use folio::preview::{BookDetail, Preview};
use folio::theme::ThemeColors;
use folio::view::{SelectOption, View, ViewState};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "folio> ";

pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("more", "Show the next page"),
    ("open <id>", "Show a book's details"),
    ("close", "Close the details"),
    ("search", "Open the search form"),
    ("title <text>", "Set the title filter (search form)"),
    ("author <id>", "Set the author filter, or any (search form)"),
    ("genre <id>", "Set the genre filter, or any (search form)"),
    ("authors", "List author ids"),
    ("genres", "List genre ids"),
    ("settings", "Open the settings form"),
    ("theme <name>", "Pick a theme (settings form)"),
    ("submit", "Submit the open form"),
    ("cancel", "Close the open form"),
    ("help", "Show this help"),
    ("quit", "Leave"),
];

/// Raw values of the search form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: ANY.to_string(),
            genre: ANY.to_string(),
        }
    }
}

impl SearchForm {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(&self.title, &self.author, &self.genre)
    }
}

pub struct TerminalView<W: Write> {
    state: ViewState,
    out: W,
    renderer: Renderer,
    use_color: bool,
    form: SearchForm,
    /// Theme picked in the settings form but not yet submitted.
    pending_theme: Option<String>,
    error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self {
            state: ViewState::new(),
            out,
            renderer: Renderer::themed(ThemeColors::default(), use_color),
            use_color,
            form: SearchForm::default(),
            pending_theme: None,
            error: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[cfg(test)]
    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() || self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }

    fn notice(&mut self, message: CmdMessage) {
        let text = render_messages(&self.renderer, &[message]);
        self.write(&text);
    }

    fn prompt(&mut self) {
        self.write(PROMPT);
        if let Err(err) = self.out.flush() {
            self.error.get_or_insert(err);
        }
    }

    fn settings_choice(&self) -> String {
        self.pending_theme
            .clone()
            .or_else(|| self.state.theme_value.clone())
            .unwrap_or_default()
    }
}

impl<W: Write> View for TerminalView<W> {
    fn clear_items(&mut self) {
        self.state.clear_items();
        self.write("\n");
    }

    fn append_items(&mut self, items: Vec<Preview>) {
        let text = render_book_list(&self.renderer, &items);
        self.write(&text);
        self.state.append_items(items);
    }

    fn set_load_more(&mut self, control: LoadMore) {
        let text = render_load_more(&self.renderer, &control);
        self.write(&text);
        self.state.set_load_more(control);
    }

    fn set_message_visible(&mut self, visible: bool) {
        self.state.set_message_visible(visible);
        if visible {
            self.notice(CmdMessage::info(NO_RESULTS));
        }
    }

    fn set_author_options(&mut self, options: Vec<SelectOption>) {
        self.state.set_author_options(options);
    }

    fn set_genre_options(&mut self, options: Vec<SelectOption>) {
        self.state.set_genre_options(options);
    }

    fn open_detail(&mut self, detail: BookDetail) {
        let text = render_detail(&self.renderer, &detail);
        self.write(&text);
        self.state.open_detail(detail);
    }

    fn close_detail(&mut self) {
        self.state.close_detail();
    }

    fn set_search_open(&mut self, open: bool) {
        self.state.set_search_open(open);
        if open {
            let text = render_search_form(
                &self.renderer,
                &self.form.title,
                &self.form.author,
                &self.form.genre,
            );
            self.write(&text);
        }
    }

    fn reset_search_form(&mut self) {
        self.state.reset_search_form();
        self.form = SearchForm::default();
    }

    fn set_settings_open(&mut self, open: bool) {
        self.state.set_settings_open(open);
        if open {
            let text = render_settings(&self.renderer, &self.settings_choice());
            self.write(&text);
        } else {
            self.pending_theme = None;
        }
    }

    fn set_theme_value(&mut self, name: &str) {
        self.state.set_theme_value(name);
    }

    fn apply_colors(&mut self, colors: ThemeColors) {
        self.state.apply_colors(colors);
        self.renderer = Renderer::themed(colors, self.use_color);
    }

    fn scroll_to_top(&mut self) {
        self.state.scroll_to_top();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(UiEvent),
    Title(String),
    Author(String),
    Genre(String),
    Theme(String),
    Authors,
    Genres,
    Submit,
    Cancel,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "" => Input::Empty,
        "more" | "m" => Input::Event(UiEvent::ShowMore),
        "open" | "o" if !arg.is_empty() => Input::Event(UiEvent::ActivateItem(BookId::new(arg))),
        "close" => Input::Event(UiEvent::CloseDetail),
        "search" | "s" => Input::Event(UiEvent::OpenSearch),
        "settings" => Input::Event(UiEvent::OpenSettings),
        "title" => Input::Title(arg.to_string()),
        "author" => Input::Author(arg.to_string()),
        "genre" => Input::Genre(arg.to_string()),
        "theme" if !arg.is_empty() => Input::Theme(arg.to_string()),
        "authors" => Input::Authors,
        "genres" => Input::Genres,
        "submit" => Input::Submit,
        "cancel" => Input::Cancel,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run_session<D, W, R>(
    browser: &mut Browser<'_, D, TerminalView<W>>,
    input: R,
    interactive: bool,
) -> Result<()>
where
    D: Dataset + ?Sized,
    W: Write,
    R: BufRead,
{
    let mut lines = input.lines();
    loop {
        if interactive {
            browser.view_mut().prompt();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let input = parse_input(&line?);
        if input == Input::Quit {
            break;
        }
        dispatch(browser, input);
        browser.view_mut().take_error()?;
    }
    browser.view_mut().take_error()?;
    Ok(())
}

fn dispatch<D, W>(browser: &mut Browser<'_, D, TerminalView<W>>, input: Input)
where
    D: Dataset + ?Sized,
    W: Write,
{
    match input {
        Input::Event(event) => {
            browser.handle(event);
        }
        Input::Title(value) => set_form_field(browser.view_mut(), |form| form.title = value),
        Input::Author(value) => set_form_field(browser.view_mut(), |form| form.author = value),
        Input::Genre(value) => set_form_field(browser.view_mut(), |form| form.genre = value),
        Input::Theme(name) => {
            let view = browser.view_mut();
            if view.state.settings_open {
                view.pending_theme = Some(name);
            } else {
                view.notice(CmdMessage::warning("Open the settings form first (settings)"));
            }
        }
        Input::Authors => {
            let view = browser.view_mut();
            let text = render_options(&view.renderer, &view.state.author_options);
            view.write(&text);
        }
        Input::Genres => {
            let view = browser.view_mut();
            let text = render_options(&view.renderer, &view.state.genre_options);
            view.write(&text);
        }
        Input::Submit => {
            let view = browser.view();
            let event = if view.state.search_open {
                UiEvent::SubmitSearch(view.form.criteria())
            } else if view.state.settings_open {
                UiEvent::SubmitSettings {
                    theme: view.settings_choice(),
                }
            } else {
                browser
                    .view_mut()
                    .notice(CmdMessage::warning("Nothing to submit"));
                return;
            };
            browser.handle(event);
        }
        Input::Cancel => {
            let state = &browser.view().state;
            let event = if state.search_open {
                UiEvent::CancelSearch
            } else if state.settings_open {
                UiEvent::CancelSettings
            } else if state.detail_open {
                UiEvent::CloseDetail
            } else {
                return;
            };
            browser.handle(event);
        }
        Input::Help => {
            let view = browser.view_mut();
            let text = render_help(&view.renderer, HELP_ENTRIES);
            view.write(&text);
        }
        Input::Unknown(line) => browser.view_mut().notice(CmdMessage::warning(format!(
            "Unknown command: {} (try help)",
            line
        ))),
        Input::Quit | Input::Empty => {}
    }
}

fn set_form_field<W: Write>(view: &mut TerminalView<W>, update: impl FnOnce(&mut SearchForm)) {
    if view.state.search_open {
        update(&mut view.form);
    } else {
        view.notice(CmdMessage::warning("Open the search form first (search)"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::controller::BrowserOptions;
    use folio::dataset::{builtin, StaticDataset};
    use folio::pagination::PageSize;
    use folio::theme::{night_colors, NIGHT};

    const DUNE: &str = "c2b8e409-8d9e";

    fn catalog() -> StaticDataset {
        builtin::load().unwrap()
    }

    fn start(dataset: &StaticDataset, page_size: usize) -> Browser<'_, StaticDataset, TerminalView<Vec<u8>>> {
        let options = BrowserOptions {
            page_size: PageSize::new(page_size).unwrap(),
            ..BrowserOptions::default()
        };
        Browser::start(dataset, TerminalView::new(Vec::new(), false), options).unwrap()
    }

    fn session(dataset: &StaticDataset, page_size: usize, script: &str) -> (ViewState, String) {
        let mut browser = start(dataset, page_size);
        run_session(&mut browser, script.as_bytes(), false).unwrap();
        let view = browser.into_view();
        let state = view.state().clone();
        (state, String::from_utf8(view.into_inner()).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("  more "), Input::Event(UiEvent::ShowMore));
        assert_eq!(
            parse_input("open abc"),
            Input::Event(UiEvent::ActivateItem(BookId::from("abc")))
        );
        assert_eq!(parse_input("open"), Input::Unknown("open".to_string()));
        assert_eq!(parse_input("title  The Left Hand "), Input::Title("The Left Hand".to_string()));
        assert_eq!(parse_input("title"), Input::Title(String::new()));
        assert_eq!(parse_input("THEME night"), Input::Theme("night".to_string()));
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("q"), Input::Quit);
        assert_eq!(parse_input("dance"), Input::Unknown("dance".to_string()));
    }

    #[test]
    fn start_prints_first_page_and_control() {
        let (state, output) = session(&catalog(), 36, "");
        assert_eq!(state.items.len(), 36);
        assert!(output.contains("Dune"));
        assert!(output.contains("[ Show more (4) ]"));
    }

    #[test]
    fn more_appends_the_next_page() {
        let (state, output) = session(&catalog(), 36, "more\nmore\n");
        assert_eq!(state.items.len(), 40);
        assert!(output.contains("[ Show more (0) ]"));
        assert_eq!(state.load_more.map(|l| l.enabled), Some(false));
    }

    #[test]
    fn search_flow_filters_by_title() {
        let (state, output) = session(&catalog(), 36, "search\ntitle dune\nsubmit\n");
        let titles: Vec<&str> = state.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Dune", "Dune Messiah", "Children of Dune", "God Emperor of Dune"]
        );
        assert!(!state.search_open);
        assert!(output.contains("Search"));
    }

    #[test]
    fn form_is_reset_after_submit() {
        let dataset = catalog();
        let mut browser = start(&dataset, 36);
        run_session(&mut browser, "search\ntitle dune\nsubmit\nsearch\n".as_bytes(), false).unwrap();
        assert_eq!(browser.view().form(), &SearchForm::default());
    }

    #[test]
    fn empty_search_prints_message() {
        let (state, output) = session(&catalog(), 36, "search\ntitle zzzz-nothing\nsubmit\n");
        assert!(state.items.is_empty());
        assert!(state.message_visible);
        assert!(output.contains(NO_RESULTS));
    }

    #[test]
    fn fields_require_open_form() {
        let (state, output) = session(&catalog(), 36, "title dune\nsubmit\n");
        assert_eq!(state.items.len(), 36);
        assert!(output.contains("Open the search form first"));
        assert!(output.contains("Nothing to submit"));
    }

    #[test]
    fn open_and_close_detail() {
        let (state, output) = session(&catalog(), 36, &format!("open {}\ncancel\n", DUNE));
        assert!(!state.detail_open);
        assert!(output.contains("Frank Herbert (1965)"));
    }

    #[test]
    fn unknown_book_is_ignored_quietly() {
        let (state, output) = session(&catalog(), 36, "open nope\n");
        assert!(state.detail.is_none());
        assert!(!output.contains("nope"));
    }

    #[test]
    fn settings_change_theme() {
        let (state, output) = session(&catalog(), 36, "settings\ntheme night\nsubmit\n");
        assert_eq!(state.theme_value.as_deref(), Some(NIGHT));
        assert_eq!(state.colors, Some(night_colors()));
        assert!(!state.settings_open);
        assert!(output.contains("theme: day"));
    }

    #[test]
    fn unknown_theme_keeps_settings_open() {
        let (state, _) = session(&catalog(), 36, "settings\ntheme sepia\nsubmit\n");
        assert!(state.settings_open);
        assert_eq!(state.theme_value.as_deref(), Some("day"));
    }

    #[test]
    fn quit_stops_reading() {
        let (state, _) = session(&catalog(), 36, "quit\nmore\n");
        assert_eq!(state.items.len(), 36);
    }

    #[test]
    fn help_and_unknown_commands() {
        let (_, output) = session(&catalog(), 36, "help\ndance\n");
        assert!(output.contains("open <id>"));
        assert!(output.contains("Unknown command: dance"));
    }

    #[test]
    fn lists_option_ids() {
        let (_, output) = session(&catalog(), 36, "authors\n");
        assert!(output.contains("All Authors"));
        assert!(output.contains("Frank Herbert"));
    }
}
