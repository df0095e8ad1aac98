//! Keyword search over the content store.
//!
//! This module provides query normalization, tokenization, additive relevance
//! scoring and ranking across all content collections.

pub mod engine;
pub mod scoring;
pub mod tokenize;

pub use engine::SearchEngine;
pub use scoring::{RELATED_TERMS, ScoredQuery, score_item};
pub use tokenize::{MIN_TOKEN_LENGTH, normalize_query, tokenize};
