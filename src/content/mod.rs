//! In-memory content store: static catalog plus page-provided items.

pub mod catalog;
pub mod provider;

pub use catalog::Catalog;
pub use provider::{ContentProvider, EmptyPage, MarkupScanner};

use crate::types::{Collection, ContentItem};

/// All indexable content, grouped by collection.
///
/// Built once at startup and read-only afterwards. Items keep their catalog order,
/// and cross-listed items (same `id` more than once) are kept as separate entries.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    collections: [Vec<ContentItem>; 5],
}

impl ContentStore {
    /// Build a store from the static catalog, then append whatever the provider
    /// finds on the current page.
    ///
    /// Provider failures are logged and ignored; the store then holds the static
    /// content only.
    pub fn new(catalog: Catalog, provider: &dyn ContentProvider) -> Self {
        let mut store = Self {
            collections: catalog.into_collections(),
        };

        match provider.scan_page() {
            Ok(items) => {
                for item in items {
                    store.push(item);
                }
            }
            Err(e) => {
                tracing::warn!("Ignoring dynamic page content: {}", e);
            }
        }

        tracing::info!(
            "Content store ready: {} videos, {} templates, {} qa, {} pages, {} categories",
            store.collection(Collection::Videos).len(),
            store.collection(Collection::Templates).len(),
            store.collection(Collection::Qa).len(),
            store.collection(Collection::Pages).len(),
            store.collection(Collection::Categories).len(),
        );

        store
    }

    /// Build a store from static content only.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(catalog, &EmptyPage)
    }

    /// Append an item to the collection matching its type.
    fn push(&mut self, item: ContentItem) {
        let collection = Collection::for_type(item.kind);
        self.collections[collection.index()].push(item);
    }

    pub fn collection(&self, collection: Collection) -> &[ContentItem] {
        &self.collections[collection.index()]
    }

    /// Every collection with its items, in `Collection::ALL` order.
    pub fn collections(&self) -> impl Iterator<Item = (Collection, &[ContentItem])> {
        Collection::ALL
            .into_iter()
            .map(|collection| (collection, self.collection(collection)))
    }

    pub fn len(&self) -> usize {
        self.collections.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
