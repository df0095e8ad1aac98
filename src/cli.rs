use crate::tracing::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taxguide-search")]
#[command(about = "Search the tax tutorial catalog", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// HTML page to scan for dynamic tutorials, Q&A entries and templates
    #[arg(short, long, global = true)]
    pub page: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a search and show the results page
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Print the ranked results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how many items each collection holds
    Catalog,
}
