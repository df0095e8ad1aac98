//! Core records shared by the content store, the search engine and the pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering/action behavior of a content item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Tutorial video, the oldest kind and the default when `type` is missing.
    #[default]
    Video,
    Template,
    Qa,
    Page,
    Category,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Template => "template",
            Self::Qa => "qa",
            Self::Page => "page",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named collection an item is indexed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Videos,
    Templates,
    Qa,
    Pages,
    Categories,
}

impl Collection {
    /// All collections in scan order.
    pub const ALL: [Self; 5] = [
        Self::Videos,
        Self::Templates,
        Self::Qa,
        Self::Pages,
        Self::Categories,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Videos => "videos",
            Self::Templates => "templates",
            Self::Qa => "qa",
            Self::Pages => "pages",
            Self::Categories => "categories",
        }
    }

    /// The collection that holds items of the given type.
    pub const fn for_type(kind: ContentType) -> Self {
        match kind {
            ContentType::Video => Self::Videos,
            ContentType::Template => Self::Templates,
            ContentType::Qa => Self::Qa,
            ContentType::Page => Self::Pages,
            ContentType::Category => Self::Categories,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single indexable record.
///
/// Missing optional fields deserialize as empty values so scoring never has to
/// special-case them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<String>,
}

impl ContentItem {
    /// Create an item with the given id, title and type; everything else empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ContentType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            ..Self::default()
        }
    }

    /// Lower-cased `title description category`, the haystack for phrase and
    /// related-term matching.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category).to_lowercase()
    }
}

/// What a consumer should do when a result is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    PlayVideo { embed_url: String },
    Navigate { url: String },
    ExpandAnswer { answer: String },
    BrowseCategory { subcategories: Vec<String> },
    /// The item lacks the field its type needs (e.g. a template without `url`).
    None,
}

/// A content item with its relevance score and originating collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    #[serde(flatten)]
    pub item: ContentItem,
    pub score: u32,
    pub content_type: Collection,
}

impl ScoredResult {
    pub const fn new(item: ContentItem, score: u32, content_type: Collection) -> Self {
        Self {
            item,
            score,
            content_type,
        }
    }

    /// Match percentage shown on result cards: ten points per score unit, capped.
    pub fn relevance_percent(&self) -> u32 {
        self.score.saturating_mul(10).min(100)
    }

    pub fn action(&self) -> ResultAction {
        let item = &self.item;
        match item.kind {
            ContentType::Video => ResultAction::PlayVideo {
                embed_url: format!("https://www.youtube.com/embed/{}?autoplay=1", item.id),
            },
            ContentType::Template | ContentType::Page => match &item.url {
                Some(url) => ResultAction::Navigate { url: url.clone() },
                None => ResultAction::None,
            },
            ContentType::Qa => match &item.answer {
                Some(answer) => ResultAction::ExpandAnswer {
                    answer: answer.clone(),
                },
                None => ResultAction::None,
            },
            ContentType::Category => ResultAction::BrowseCategory {
                subcategories: item.subcategories.clone(),
            },
        }
    }
}
