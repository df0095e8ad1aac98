//! Static content definitions loaded from TOML.

use crate::error::Result;
use crate::types::{Collection, ContentItem};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// The static collections a content store starts from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub videos: Vec<ContentItem>,
    pub templates: Vec<ContentItem>,
    pub qa: Vec<ContentItem>,
    pub pages: Vec<ContentItem>,
    pub categories: Vec<ContentItem>,
}

impl Catalog {
    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG).context("Failed to parse built-in catalog")
    }

    /// Load a catalog file in the same format as the built-in one.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse catalog {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Consume the catalog into per-collection vectors, in `Collection::ALL` order.
    pub(crate) fn into_collections(self) -> [Vec<ContentItem>; 5] {
        [
            self.videos,
            self.templates,
            self.qa,
            self.pages,
            self.categories,
        ]
    }

    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Videos => self.videos.len(),
            Collection::Templates => self.templates.len(),
            Collection::Qa => self.qa.len(),
            Collection::Pages => self.pages.len(),
            Collection::Categories => self.categories.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentType;
    use assert2::check;
    use std::io::Write as _;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        for collection in Collection::ALL {
            check!(catalog.len(collection) > 0, "{collection} is empty");
        }
        check!(catalog.videos.iter().all(|v| v.kind == ContentType::Video));
        check!(catalog.qa.iter().all(|q| q.answer.is_some()));
        check!(catalog.templates.iter().all(|t| t.url.is_some()));
    }

    #[test]
    fn builtin_catalog_keeps_cross_listed_videos() {
        let catalog = Catalog::builtin().unwrap();
        let listings = catalog
            .videos
            .iter()
            .filter(|v| v.id == "nHipbjjsGMM")
            .count();
        check!(listings == 2);
    }

    #[test]
    fn partial_catalog_defaults_missing_collections() {
        let catalog = Catalog::parse(
            r#"
            [[qa]]
            id = "q1"
            type = "qa"
            title = "Pyetje"
            "#,
        )
        .unwrap();
        check!(catalog.videos.is_empty());
        check!(catalog.qa.len() == 1);
        check!(catalog.qa[0].keywords.is_empty());
    }

    #[test]
    fn from_path_reports_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[videos]]\nid = 5").unwrap();

        let err = Catalog::from_path(file.path()).unwrap_err();
        check!(format!("{err:#}").contains("Failed to parse catalog"));
    }
}
