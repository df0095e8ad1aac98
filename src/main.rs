use anyhow::Context;
use clap::Parser;
use std::path::Path;
use taxguide_search::cli::{Cli, Commands};
use taxguide_search::content::{ContentProvider, EmptyPage};
use taxguide_search::navigation::query_param;
use taxguide_search::pages::{ResultsView, format_results, load_results, submit_search};
use taxguide_search::{ContentStore, MarkupScanner, SearchEngine, SessionBridge, Settings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    taxguide_search::tracing::init(cli.verbose, cli.log_format);

    let settings = Settings::load(cli.config.as_deref())?;
    let catalog = settings.catalog()?;
    let provider = page_provider(cli.page.as_deref())?;
    let engine = SearchEngine::new(ContentStore::new(catalog, provider.as_ref()));

    match cli.command {
        Commands::Search { query, json } => run_search(&engine, &settings, &query.join(" "), json),
        Commands::Catalog => {
            for (collection, items) in engine.store().collections() {
                println!("{:<12} {}", collection, items.len());
            }
            Ok(())
        }
    }
}

/// The provider for `--page`, or an empty page.
fn page_provider(page: Option<&Path>) -> anyhow::Result<Box<dyn ContentProvider>> {
    let Some(path) = page else {
        return Ok(Box::new(EmptyPage));
    };

    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page {}", path.display()))?;
    match MarkupScanner::new(html) {
        Ok(scanner) => Ok(Box::new(scanner)),
        Err(e) => {
            tracing::warn!("Page scanner unavailable, using static content only: {}", e);
            Ok(Box::new(EmptyPage))
        }
    }
}

/// Submit from the search box, follow the navigation and render the results page.
fn run_search(
    engine: &SearchEngine,
    settings: &Settings,
    raw_query: &str,
    json: bool,
) -> anyhow::Result<()> {
    let mut bridge = SessionBridge::new();

    let Some(navigation) = submit_search(engine, &mut bridge, raw_query)? else {
        println!("Nothing to search for.");
        return Ok(());
    };

    let url = navigation.url(settings)?;
    tracing::info!("Navigating to {}", url);

    let param = query_param(&url);
    let view = load_results(
        engine,
        &bridge,
        param.as_deref(),
        settings.fallback_sample_size,
    );

    if let ResultsView::Redirect(target) = &view {
        let target = target.url(settings)?;
        println!("Redirecting to {}", target);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(view.items())?);
    } else {
        print!("{}", format_results(&view));
    }

    Ok(())
}
