//! # Rendering Module
//!
//! Styled terminal output through minijinja templates and a `style` filter.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! need Unicode-aware processing. Templates pick styles and handle conditional
//! sections. Every `render_*` function returns a `String`; printing is left to
//! the caller.

use super::styles::{names, Styles};
use super::templates::TEMPLATES;
use folio::api::{CmdMessage, MessageLevel, ThemeEntry};
use folio::config::FolioConfig;
use folio::engine::LoadMore;
use folio::preview::{BookDetail, Preview};
use folio::theme::ThemeColors;
use folio::view::SelectOption;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const AUTHOR_WIDTH: usize = 26;
pub const DESCRIPTION_WIDTH: usize = 76;

/// Templates compiled once, with the style filter bound to one palette.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(styles: Styles, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            if use_color {
                styles.apply(&name, &text)
            } else {
                styles.apply_plain(&name, &text)
            }
        });
        for &(name, source) in TEMPLATES {
            if let Err(err) = env.add_template(name, source) {
                tracing::error!(template = name, error = %err, "template does not compile");
            }
        }
        Self { env }
    }

    pub fn themed(colors: ThemeColors, use_color: bool) -> Self {
        Self::new(Styles::for_theme(colors), use_color)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }
}

#[derive(Serialize)]
struct BookLineData {
    id: String,
    id_padding: String,
    title: String,
    padding: String,
    author: String,
    author_known: bool,
}

#[derive(Serialize)]
struct ListData {
    books: Vec<BookLineData>,
}

#[derive(Serialize)]
struct LoadMoreData {
    label: String,
    enabled: bool,
}

#[derive(Serialize)]
struct DetailData {
    title: String,
    subtitle: String,
    genres: String,
    image: String,
    description: Vec<String>,
}

#[derive(Serialize)]
struct OptionLineData {
    value: String,
    padding: String,
    label: String,
}

#[derive(Serialize)]
struct OptionsData {
    options: Vec<OptionLineData>,
}

#[derive(Serialize)]
struct ThemeLineData {
    name: String,
    padding: String,
    dark: String,
    light: String,
    active: bool,
}

#[derive(Serialize)]
struct ThemesData {
    themes: Vec<ThemeLineData>,
}

#[derive(Serialize)]
struct SearchFormData {
    title: String,
    author: String,
    genre: String,
}

#[derive(Serialize)]
struct SettingsData {
    theme: String,
}

#[derive(Serialize)]
struct ConfigData {
    page_size: usize,
    theme: String,
    dataset: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct HelpData {
    entries: Vec<(String, String, String)>,
}

/// One line per preview: id, title and author columns.
///
/// The id column is as wide as the widest id in `books`, so a continuation
/// page may align differently from the page above it.
pub fn render_book_list(renderer: &Renderer, books: &[Preview]) -> String {
    if books.is_empty() {
        return String::new();
    }

    let id_width = books.iter().map(|b| b.id.as_str().width()).max().unwrap_or(0);
    // two-space indent plus the two column gaps
    let fixed_width = 2 + id_width + 2 + 2 + AUTHOR_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let lines = books
        .iter()
        .map(|book| {
            let title = truncate_to_width(&book.title, available);
            let author = truncate_to_width(book.author_or_unknown(), AUTHOR_WIDTH);
            BookLineData {
                id: book.id.to_string(),
                id_padding: " ".repeat(id_width.saturating_sub(book.id.as_str().width())),
                padding: " ".repeat(available.saturating_sub(title.width())),
                title,
                author,
                author_known: book.author.is_some(),
            }
        })
        .collect();

    renderer.render("list", &ListData { books: lines })
}

pub fn render_load_more(renderer: &Renderer, control: &LoadMore) -> String {
    let data = LoadMoreData {
        label: format!("[ {} ]", control.label()),
        enabled: control.enabled,
    };
    renderer.render("load_more", &data)
}

pub fn render_detail(renderer: &Renderer, detail: &BookDetail) -> String {
    let data = DetailData {
        title: detail.title.clone(),
        subtitle: detail.subtitle.clone(),
        genres: detail.genres.join(", "),
        image: detail.image.clone(),
        description: wrap_text(&detail.description, DESCRIPTION_WIDTH),
    };
    renderer.render("detail", &data)
}

pub fn render_options(renderer: &Renderer, options: &[SelectOption]) -> String {
    let value_width = options.iter().map(|o| o.value.width()).max().unwrap_or(0);
    let options = options
        .iter()
        .map(|option| OptionLineData {
            value: option.value.clone(),
            padding: " ".repeat(value_width.saturating_sub(option.value.width())),
            label: option.label.clone(),
        })
        .collect();
    renderer.render("options", &OptionsData { options })
}

/// Theme names with their color variables; `active` is marked with `*`.
pub fn render_themes(renderer: &Renderer, themes: &[ThemeEntry], active: Option<&str>) -> String {
    let name_width = themes.iter().map(|t| t.name.width()).max().unwrap_or(0);
    let themes = themes
        .iter()
        .map(|theme| ThemeLineData {
            name: theme.name.clone(),
            padding: " ".repeat(name_width.saturating_sub(theme.name.width())),
            dark: theme.colors.dark.to_string(),
            light: theme.colors.light.to_string(),
            active: active == Some(theme.name.as_str()),
        })
        .collect();
    renderer.render("themes", &ThemesData { themes })
}

pub fn render_search_form(renderer: &Renderer, title: &str, author: &str, genre: &str) -> String {
    let data = SearchFormData {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
    };
    renderer.render("search_form", &data)
}

pub fn render_settings(renderer: &Renderer, theme: &str) -> String {
    let data = SettingsData {
        theme: theme.to_string(),
    };
    renderer.render("settings", &data)
}

pub fn render_config(renderer: &Renderer, config: &FolioConfig) -> String {
    let data = ConfigData {
        page_size: config.page_size.get(),
        theme: config.theme.clone().unwrap_or_else(|| "(system)".to_string()),
        dataset: config
            .dataset
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string()),
    };
    renderer.render("config", &data)
}

pub fn render_help(renderer: &Renderer, entries: &[(&str, &str)]) -> String {
    let width = entries.iter().map(|(cmd, _)| cmd.width()).max().unwrap_or(0);
    let entries = entries
        .iter()
        .map(|(cmd, about)| {
            (
                cmd.to_string(),
                " ".repeat(width.saturating_sub(cmd.width())),
                about.to_string(),
            )
        })
        .collect();
    renderer.render("help", &HelpData { entries })
}

pub fn render_messages(renderer: &Renderer, messages: &[CmdMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let messages = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    renderer.render("messages", &MessagesData { messages })
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.width() + 1 + word.width() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}
