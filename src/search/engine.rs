//! Ranking across every collection of a content store.

use crate::content::ContentStore;
use crate::types::{Collection, ScoredResult};

use super::scoring::ScoredQuery;
use super::tokenize::normalize_query;

/// Searches a content store. Construct once and pass it to whatever triggers a
/// search.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: ContentStore,
}

impl SearchEngine {
    pub const fn new(store: ContentStore) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Rank every item in every collection against `query`.
    ///
    /// Items scoring zero are dropped. The rest are merged and sorted by score,
    /// highest first; ties keep collection order, then catalog order.
    pub fn search(&self, query: &str) -> Vec<ScoredResult> {
        let Some(phrase) = normalize_query(query) else {
            return vec![];
        };

        let start = std::time::Instant::now();
        let scored = ScoredQuery::new(&phrase);
        let query = &scored;

        let mut results: Vec<ScoredResult> = self
            .store
            .collections()
            .flat_map(|(collection, items)| {
                items.iter().filter_map(move |item| {
                    let score = query.score(item);
                    (score > 0).then(|| ScoredResult::new(item.clone(), score, collection))
                })
            })
            .collect();
        results.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Search '{}' ({} tokens): {} of {} items matched in {:?}",
            phrase,
            scored.tokens().len(),
            results.len(),
            self.store.len(),
            start.elapsed()
        );

        results
    }

    /// The first `count` videos, unscored. Shown when a search finds nothing.
    pub fn fallback_sample(&self, count: usize) -> Vec<ScoredResult> {
        self.store
            .collection(Collection::Videos)
            .iter()
            .take(count)
            .map(|item| ScoredResult::new(item.clone(), 0, Collection::Videos))
            .collect()
    }
}
