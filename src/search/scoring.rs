//! Search relevance scoring.
//!
//! Scores are additive and never decrease while being computed:
//! - 10: the whole query appears in `title description category`
//! - 5 / 3 / 2 per token found in the title / description / category
//! - 4 per token equal to one of the item's keywords
//! - 2 per related-term group whose canonical term the item mentions

use crate::types::ContentItem;

use super::tokenize::tokenize;

/// Bonus when the full normalized query is a substring of the searchable text.
pub const PHRASE_BONUS: u32 = 10;
pub const TITLE_BONUS: u32 = 5;
pub const DESCRIPTION_BONUS: u32 = 3;
pub const CATEGORY_BONUS: u32 = 2;
pub const KEYWORD_BONUS: u32 = 4;
pub const RELATED_TERM_BONUS: u32 = 2;

/// Canonical domain terms and the surface forms that imply them.
pub const RELATED_TERMS: &[(&str, &[&str])] = &[
    ("si", &["how", "tutorial", "guide", "udhëzues"]),
    ("aplikim", &["application", "apply", "submit", "register"]),
    ("deklarim", &["declare", "submit", "report", "file"]),
    ("biznes", &["business", "company", "firm", "enterprise"]),
    ("tatim", &["tax", "fiscal", "payment", "duty"]),
    ("dokument", &["document", "form", "paper", "file"]),
];

/// A normalized query prepared for scoring many items.
#[derive(Debug, Clone)]
pub struct ScoredQuery<'q> {
    phrase: &'q str,
    tokens: Vec<&'q str>,
    /// Canonical terms triggered by the query, resolved once per search.
    canonical_terms: Vec<&'static str>,
}

impl<'q> ScoredQuery<'q> {
    /// `phrase` must already be trimmed and lower-cased.
    pub fn new(phrase: &'q str) -> Self {
        let canonical_terms = RELATED_TERMS
            .iter()
            .filter(|(term, related)| {
                phrase.contains(term) || related.iter().any(|form| phrase.contains(form))
            })
            .map(|(term, _)| *term)
            .collect();

        Self {
            phrase,
            tokens: tokenize(phrase),
            canonical_terms,
        }
    }

    pub fn tokens(&self) -> &[&'q str] {
        &self.tokens
    }

    /// Score one item against this query. Zero means no match.
    pub fn score(&self, item: &ContentItem) -> u32 {
        let searchable = item.searchable_text();
        let mut score = 0;

        if searchable.contains(self.phrase) {
            score += PHRASE_BONUS;
        }

        let title = item.title.to_lowercase();
        let description = item.description.to_lowercase();
        let category = item.category.to_lowercase();
        let keywords: Vec<String> = item.keywords.iter().map(|k| k.to_lowercase()).collect();

        for token in &self.tokens {
            if title.contains(token) {
                score += TITLE_BONUS;
            }
            if description.contains(token) {
                score += DESCRIPTION_BONUS;
            }
            if category.contains(token) {
                score += CATEGORY_BONUS;
            }
            if keywords.iter().any(|keyword| keyword == token) {
                score += KEYWORD_BONUS;
            }
        }

        for term in &self.canonical_terms {
            if searchable.contains(term) {
                score += RELATED_TERM_BONUS;
            }
        }

        score
    }
}

/// Score a single item against a normalized query.
pub fn score_item(phrase: &str, item: &ContentItem) -> u32 {
    ScoredQuery::new(phrase).score(item)
}
