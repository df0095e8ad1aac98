//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `builtin_engine`: engine over the bundled catalog, no page content
//! - `single_item_engine`: engine holding only the business-address tutorial
//!
//! Helpers build small catalogs for tests that need exact control over content.

use rstest::fixture;
use taxguide_search::{Catalog, ContentItem, ContentStore, ContentType, SearchEngine};

/// Engine over the built-in catalog.
#[fixture]
pub fn builtin_engine() -> SearchEngine {
    SearchEngine::new(ContentStore::from_catalog(
        Catalog::builtin().expect("built-in catalog must parse"),
    ))
}

/// Engine holding a single video about changing a business address.
#[allow(dead_code)]
#[fixture]
pub fn single_item_engine() -> SearchEngine {
    engine_with_videos(vec![item(
        "addr",
        "Si të ndryshoj adresën e biznesit",
        "udhëzues",
        "e-albania",
        &["adresë", "biznes"],
    )])
}

#[allow(dead_code)] // Used across different integration test crates
pub fn engine_with_videos(videos: Vec<ContentItem>) -> SearchEngine {
    SearchEngine::new(ContentStore::from_catalog(Catalog {
        videos,
        ..Catalog::default()
    }))
}

/// A video item with the given searchable fields.
#[allow(dead_code)]
pub fn item(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    keywords: &[&str],
) -> ContentItem {
    ContentItem {
        description: description.to_string(),
        category: category.to_string(),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        ..ContentItem::new(id, title, ContentType::Video)
    }
}
