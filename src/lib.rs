pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod search;
pub mod tracing;
pub mod types;

pub use config::Settings;
pub use content::{Catalog, ContentProvider, ContentStore, MarkupScanner};
pub use navigation::{Navigation, NavigationBridge, SessionBridge};
pub use pages::{ResultsView, load_results, submit_search};
pub use search::SearchEngine;
pub use types::{Collection, ContentItem, ContentType, ResultAction, ScoredResult};
