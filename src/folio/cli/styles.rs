//! Named console styles used by the templates' `style` filter.
//!
//! Message styles are fixed. Catalog styles are derived from the active theme:
//! the theme's `dark` color is the text color and its `light` color the
//! surface, the same way the two variables are used by a page stylesheet.

use console::Style;
use folio::theme::{rgb_to_ansi256, ThemeColors};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style that is not registered.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const ID: &str = "id";
    pub const HEADING: &str = "heading";
    pub const BUTTON: &str = "button";
    pub const BUTTON_DISABLED: &str = "button_disabled";
    pub const MUTED: &str = "muted";
    pub const ACTIVE: &str = "active";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<&'static str, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styled text, or the text behind [`MISSING_STYLE_INDICATOR`] for unknown names.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Same checks as [`Styles::apply`] without emitting ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Message styles plus the catalog styles for `colors`.
    pub fn for_theme(colors: ThemeColors) -> Self {
        let text = rgb_to_ansi256(colors.dark);
        let surface = rgb_to_ansi256(colors.light);
        MESSAGE_STYLES
            .clone()
            .add(names::TITLE, Style::new().color256(text).bold())
            .add(names::AUTHOR, Style::new().color256(text).italic())
            .add(names::ID, Style::new().color256(text).dim())
            .add(names::HEADING, Style::new().color256(text).bold().underlined())
            .add(
                names::BUTTON,
                Style::new().color256(surface).on_color256(text).bold(),
            )
            .add(names::BUTTON_DISABLED, Style::new().color256(text).dim())
            .add(names::ACTIVE, Style::new().color256(text).bold())
    }
}

pub static MESSAGE_STYLES: Lazy<Styles> = Lazy::new(|| {
    Styles::new()
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::MUTED, Style::new().color256(rgb_to_ansi256(folio::theme::Rgb(154, 154, 154))))
});

#[cfg(test)]
mod tests {
    use super::*;
    use folio::theme::{day_colors, night_colors};

    #[test]
    fn theme_styles_include_message_styles() {
        let styles = Styles::for_theme(day_colors());
        for name in [names::TITLE, names::BUTTON, names::INFO, names::ERROR] {
            assert!(styles.has(name), "missing {}", name);
        }
    }

    #[test]
    fn unknown_style_shows_indicator() {
        let styles = Styles::for_theme(night_colors());
        assert_eq!(styles.apply("typo", "hello"), "(!?) hello");
        assert_eq!(styles.apply_plain("typo", "hello"), "(!?) hello");
        assert_eq!(styles.apply_plain(names::TITLE, "hello"), "hello");
    }

    #[test]
    fn forced_styles_emit_ansi() {
        let styles = Styles::new().add(names::TITLE, Style::new().bold().force_styling(true));
        let out = styles.apply(names::TITLE, "Dune");
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("Dune"));
    }
}
