//! Transient state handed from the search page to the results page.
//!
//! A browser keeps this in session storage; here it is an explicit key/value
//! bridge so the hand-off can be exercised without a browser.

use crate::config::Settings;
use crate::error::{BridgeError, Result};
use crate::types::ScoredResult;
use ahash::AHashMap;
use anyhow::Context;
use url::Url;

/// Key holding the last normalized query.
pub const LAST_SEARCH_KEY: &str = "lastSearch";
/// Key holding the serialized results of the last search.
pub const LAST_RESULTS_KEY: &str = "lastResults";
/// Query-string parameter carrying the query to the results page.
pub const QUERY_PARAM: &str = "q";

/// Per-session key/value storage shared by the trigger and the restorer.
pub trait NavigationBridge {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory bridge living for one browsing session.
#[derive(Debug, Clone, Default)]
pub struct SessionBridge {
    entries: AHashMap<String, String>,
}

impl SessionBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NavigationBridge for SessionBridge {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Store the query and its results, replacing whatever the last search left.
pub fn persist_search(
    bridge: &mut dyn NavigationBridge,
    query: &str,
    results: &[ScoredResult],
) -> std::result::Result<(), BridgeError> {
    let serialized = serde_json::to_string(results).map_err(BridgeError::Serialize)?;
    bridge.set(LAST_SEARCH_KEY, query.to_string());
    bridge.set(LAST_RESULTS_KEY, serialized);
    Ok(())
}

pub fn last_query(bridge: &dyn NavigationBridge) -> Option<String> {
    bridge.get(LAST_SEARCH_KEY).filter(|q| !q.trim().is_empty())
}

/// Results persisted by the last search, if any.
pub fn last_results(
    bridge: &dyn NavigationBridge,
) -> std::result::Result<Option<Vec<ScoredResult>>, BridgeError> {
    bridge
        .get(LAST_RESULTS_KEY)
        .map(|raw| serde_json::from_str(&raw).map_err(BridgeError::Deserialize))
        .transpose()
}

/// Where a page sends the user next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The results page, carrying the normalized query.
    Results { query: String },
    /// The default landing page.
    Home,
}

impl Navigation {
    /// Absolute URL of the navigation target on the configured site.
    pub fn url(&self, settings: &Settings) -> Result<Url> {
        let base = Url::parse(&settings.site_url)
            .with_context(|| format!("Invalid site URL '{}'", settings.site_url))?;

        match self {
            Self::Results { query } => {
                let mut url = base
                    .join(&settings.results_path)
                    .context("Invalid results page path")?;
                url.query_pairs_mut().clear().append_pair(QUERY_PARAM, query);
                Ok(url)
            }
            Self::Home => base.join(&settings.home_path).context("Invalid home page path"),
        }
    }
}

/// The `q` parameter of a results-page URL, if present.
pub fn query_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}
