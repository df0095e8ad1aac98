//! Search trigger: the search box on every page.

use crate::error::Result;
use crate::navigation::{Navigation, NavigationBridge, persist_search};
use crate::search::{SearchEngine, normalize_query};

/// Run a search and hand it over to the results page.
///
/// Typed and transcribed queries go through here alike. An empty query does
/// nothing: no state is written and `None` is returned. Otherwise the normalized
/// query and its ranked results replace the previous ones in the bridge and the
/// caller should follow the returned navigation.
pub fn submit_search(
    engine: &SearchEngine,
    bridge: &mut dyn NavigationBridge,
    raw_query: &str,
) -> Result<Option<Navigation>> {
    let Some(query) = normalize_query(raw_query) else {
        tracing::debug!("Ignoring empty search");
        return Ok(None);
    };

    let results = engine.search(&query);
    persist_search(bridge, &query, &results)?;
    tracing::info!("Search '{}' found {} results", query, results.len());

    Ok(Some(Navigation::Results { query }))
}
