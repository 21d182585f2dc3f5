use crate::error::{FolioError, Result};
use crate::pagination::PageSize;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Startup configuration, read from `config.json` in the config directory.
///
/// The file is only ever read. Nothing chosen during a session is written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FolioConfig {
    /// Books revealed per "show more" step
    #[serde(default)]
    pub page_size: PageSize,

    /// Theme to start with; when unset the system color scheme decides
    #[serde(default)]
    pub theme: Option<String>,

    /// Catalog file to load instead of the built-in one
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            FolioError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = Some(path.into());
        self
    }
}

/// Platform config directory, e.g. `~/.config/folio` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "folio", "folio").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::DEFAULT_PAGE_SIZE;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.page_size.get(), DEFAULT_PAGE_SIZE);
        assert_eq!(config.theme, None);
        assert_eq!(config.dataset, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"page_size": 12, "theme": "night"}"#,
        )
        .unwrap();

        let config = FolioConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.page_size.get(), 12);
        assert_eq!(config.theme.as_deref(), Some("night"));
        assert_eq!(config.dataset, None);
    }

    #[test]
    fn test_zero_page_size_is_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"page_size": 0}"#).unwrap();

        let err = FolioConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let config = FolioConfig::default()
            .with_page_size(PageSize::new(5).unwrap())
            .with_theme("day")
            .with_dataset("/tmp/catalog.json");
        assert_eq!(config.page_size.get(), 5);
        assert_eq!(config.theme.as_deref(), Some("day"));
        assert_eq!(config.dataset, Some(PathBuf::from("/tmp/catalog.json")));
    }
}
