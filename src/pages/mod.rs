//! The two page-level flows around a search: submitting it and showing results.

pub mod results;
pub mod search;

pub use results::{ResultsView, format_results, load_results};
pub use search::submit_search;
