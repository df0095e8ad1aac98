//! Results page: restores or recomputes the ranked results for a query.

use crate::navigation::{Navigation, NavigationBridge, last_query, last_results};
use crate::search::{SearchEngine, normalize_query};
use crate::types::{ResultAction, ScoredResult};

/// What the results page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Ranked matches for the query.
    Ranked {
        query: String,
        results: Vec<ScoredResult>,
    },
    /// Nothing matched; a sample of recent tutorials is shown instead.
    Fallback {
        query: String,
        sample: Vec<ScoredResult>,
    },
    /// No query was available; the user should be sent elsewhere.
    Redirect(Navigation),
}

impl ResultsView {
    /// Headline shown above the result cards.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Ranked { results, .. } => Some(format!("{} rezultate u gjetën", results.len())),
            Self::Fallback { query, .. } => Some(format!(
                "Nuk u gjetën rezultate për \"{}\". Ju sugjerojmë të shikoni tutorialet tona më të fundit:",
                query
            )),
            Self::Redirect(_) => None,
        }
    }

    /// Items to render, ranked or fallback.
    pub fn items(&self) -> &[ScoredResult] {
        match self {
            Self::Ranked { results, .. } => results,
            Self::Fallback { sample, .. } => sample,
            Self::Redirect(_) => &[],
        }
    }
}

/// Build the results view.
///
/// The query comes from the `q` parameter when present, else from the last
/// search in the bridge. Persisted results are reused as long as they belong to
/// that query and are not empty; otherwise the search runs again. The bridge is
/// only read, so repeated loads show the same results.
pub fn load_results(
    engine: &SearchEngine,
    bridge: &dyn NavigationBridge,
    query_param: Option<&str>,
    fallback_size: usize,
) -> ResultsView {
    let Some(query) = query_param
        .and_then(normalize_query)
        .or_else(|| last_query(bridge).and_then(|q| normalize_query(&q)))
    else {
        tracing::debug!("Results page opened without a query, redirecting home");
        return ResultsView::Redirect(Navigation::Home);
    };

    let results = match restore(bridge, &query) {
        Some(results) => {
            tracing::debug!("Reusing {} stored results for '{}'", results.len(), query);
            results
        }
        None => engine.search(&query),
    };

    if results.is_empty() {
        let sample = engine.fallback_sample(fallback_size);
        return ResultsView::Fallback { query, sample };
    }

    ResultsView::Ranked { query, results }
}

/// Stored results for `query`, if usable.
fn restore(bridge: &dyn NavigationBridge, query: &str) -> Option<Vec<ScoredResult>> {
    if last_query(bridge).as_deref() != Some(query) {
        return None;
    }

    match last_results(bridge) {
        Ok(Some(results)) if !results.is_empty() => Some(results),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Discarding stored results: {}", e);
            None
        }
    }
}

/// Format a results view into a readable string output.
pub fn format_results(view: &ResultsView) -> String {
    let (query, fallback) = match view {
        ResultsView::Ranked { query, .. } => (query, false),
        ResultsView::Fallback { query, .. } => (query, true),
        ResultsView::Redirect(_) => return "No query given.\n".to_string(),
    };

    let mut output = format!("Kërkimi: {}\n", query);
    if let Some(message) = view.message() {
        output.push_str(&message);
        output.push_str("\n\n");
    }

    for (idx, result) in view.items().iter().enumerate() {
        let item = &result.item;
        output.push_str(&format!("{}. {} [{}]", idx + 1, item.title.trim(), item.kind));
        if !fallback {
            output.push_str(&format!(" - Përputhshmëria: {}%", result.relevance_percent()));
        }
        output.push('\n');

        let detail = match result.action() {
            ResultAction::PlayVideo { embed_url } => Some(embed_url),
            ResultAction::Navigate { url } => Some(url),
            ResultAction::ExpandAnswer { answer } => Some(answer),
            ResultAction::BrowseCategory { subcategories } => Some(subcategories.join(", ")),
            ResultAction::None => None,
        };
        if let Some(detail) = detail {
            output.push_str(&format!("   {}\n", detail));
        }
    }

    output
}
