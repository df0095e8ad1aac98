//! Site settings loaded from an optional TOML file.

use crate::content::Catalog;
use crate::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "taxguide-search";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Base URL the page paths are resolved against.
    pub site_url: String,
    pub results_path: String,
    pub home_path: String,
    /// Number of videos shown when a search finds nothing.
    pub fallback_sample_size: usize,
    /// Catalog file replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_url: "http://localhost/".to_string(),
            results_path: "search-results.html".to_string(),
            home_path: "index.html".to_string(),
            fallback_sample_size: 6,
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, else from the user config directory if a
    /// config file exists there, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default file
    /// is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => {
                tracing::debug!("No config file found, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::builtin(),
        }
    }
}

/// `<config dir>/taxguide-search/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use std::io::Write as _;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("fallback_sample_size = 3\n");
        let settings = Settings::load(Some(file.path())).unwrap();

        check!(settings.fallback_sample_size == 3);
        check!(settings.results_path == "search-results.html");
        check!(settings.catalog_path.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("fallback_sample = 3\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        check!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        check!(Settings::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn catalog_path_overrides_builtin() {
        let catalog = write_config("[[pages]]\nid = \"p\"\ntype = \"page\"\ntitle = \"Faqe\"\n");
        let settings = Settings {
            catalog_path: Some(catalog.path().to_path_buf()),
            ..Settings::default()
        };

        let loaded = settings.catalog().unwrap();
        check!(loaded.pages.len() == 1);
        check!(loaded.videos.is_empty());
    }
}
