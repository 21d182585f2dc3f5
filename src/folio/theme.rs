//! # Themes
//!
//! A theme is a named pair of colors, `dark` and `light`, applied as the two
//! visual variables every view renders with (`--color-dark` / `--color-light`).
//! Datasets ship the pairs as `"r, g, b"` strings, the same form the variables take.
//!
//! Two names are always present: [`DAY`] and [`NIGHT`]. When no theme is
//! configured the system color-scheme preference picks between them.

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DAY: &str = "day";
pub const NIGHT: &str = "night";

pub const COLOR_DARK_VAR: &str = "--color-dark";
pub const COLOR_LIGHT_VAR: &str = "--color-light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts[..] else {
            return Err(FolioError::Dataset(format!(
                "color {:?} must have three components",
                s
            )));
        };
        let channel = |c: &str| {
            c.parse::<u8>()
                .map_err(|_| FolioError::Dataset(format!("invalid color component {:?} in {:?}", c, s)))
        };
        Ok(Rgb(channel(r)?, channel(g)?, channel(b)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = FolioError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub dark: Rgb,
    pub light: Rgb,
}

impl ThemeColors {
    /// The two variable assignments a view applies, in order.
    pub fn variables(&self) -> [(&'static str, String); 2] {
        [
            (COLOR_DARK_VAR, self.dark.to_string()),
            (COLOR_LIGHT_VAR, self.light.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTable {
    themes: BTreeMap<String, ThemeColors>,
}

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, colors: ThemeColors) -> Self {
        self.themes.insert(name.to_string(), colors);
        self
    }

    pub fn get(&self, name: &str) -> Option<ThemeColors> {
        self.themes.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ThemeColors)> {
        self.themes.iter().map(|(name, colors)| (name.as_str(), *colors))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Fails unless both [`DAY`] and [`NIGHT`] are defined.
    pub fn validate(&self) -> Result<()> {
        for required in [DAY, NIGHT] {
            if !self.themes.contains_key(required) {
                return Err(FolioError::Dataset(format!(
                    "theme table is missing \"{}\"",
                    required
                )));
            }
        }
        Ok(())
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        day_colors()
    }
}

pub fn day_colors() -> ThemeColors {
    ThemeColors {
        dark: Rgb(10, 10, 20),
        light: Rgb(255, 255, 255),
    }
}

pub fn night_colors() -> ThemeColors {
    ThemeColors {
        dark: Rgb(255, 255, 255),
        light: Rgb(10, 10, 20),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn theme_name(self) -> &'static str {
        match self {
            ColorScheme::Light => DAY,
            ColorScheme::Dark => NIGHT,
        }
    }
}

/// Reads the desktop's color-scheme preference.
pub fn detect_color_scheme() -> ColorScheme {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorScheme::Dark,
        dark_light::Mode::Light => ColorScheme::Light,
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256(rgb: Rgb) -> u8 {
    let Rgb(r, g, b) = rgb;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_variable_form() {
        assert_eq!("10, 10, 20".parse::<Rgb>().unwrap(), Rgb(10, 10, 20));
        assert_eq!("255,255,255".parse::<Rgb>().unwrap(), Rgb(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!("10, 10".parse::<Rgb>().is_err());
        assert!("10, 10, 300".parse::<Rgb>().is_err());
        assert!("red".parse::<Rgb>().is_err());
    }

    #[test]
    fn variables_are_dark_then_light() {
        let vars = night_colors().variables();
        assert_eq!(vars[0], (COLOR_DARK_VAR, "255, 255, 255".to_string()));
        assert_eq!(vars[1], (COLOR_LIGHT_VAR, "10, 10, 20".to_string()));
    }

    #[test]
    fn table_requires_day_and_night() {
        let table = ThemeTable::new().add(DAY, day_colors());
        assert!(table.validate().is_err());
        let table = table.add(NIGHT, night_colors());
        assert!(table.validate().is_ok());
        assert_eq!(table.get(NIGHT), Some(night_colors()));
        assert_eq!(table.get("sepia"), None);
    }

    #[test]
    fn table_deserializes_from_strings() {
        let json = r#"{"day": {"dark": "10, 10, 20", "light": "255, 255, 255"}}"#;
        let table: ThemeTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.get(DAY), Some(day_colors()));
    }

    #[test]
    fn scheme_maps_to_theme_name() {
        assert_eq!(ColorScheme::Dark.theme_name(), NIGHT);
        assert_eq!(ColorScheme::Light.theme_name(), DAY);
    }

    #[test]
    fn detected_scheme_names_a_required_theme() {
        let name = detect_color_scheme().theme_name();
        assert!(name == DAY || name == NIGHT);
    }

    #[test]
    fn rgb_to_ansi256_grayscale_and_cube() {
        assert_eq!(rgb_to_ansi256(Rgb(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgb(255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256(Rgb(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb(10, 10, 20)), 16);
    }
}
