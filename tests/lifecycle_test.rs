mod common;

use assert2::{check, let_assert};
use common::{builtin_engine, engine_with_videos, item};
use rstest::rstest;
use taxguide_search::navigation::{LAST_RESULTS_KEY, LAST_SEARCH_KEY, query_param};
use taxguide_search::pages::format_results;
use taxguide_search::{
    Navigation, NavigationBridge, ResultsView, SearchEngine, SessionBridge, Settings,
    load_results, submit_search,
};

/// Submit a query and load the results page the way a browser would: follow the
/// navigation URL and read `q` back from it.
fn search_and_follow(
    engine: &SearchEngine,
    bridge: &mut SessionBridge,
    query: &str,
) -> ResultsView {
    let_assert!(Ok(Some(navigation)) = submit_search(engine, bridge, query));
    let url = navigation.url(&Settings::default()).unwrap();
    load_results(engine, bridge, query_param(&url).as_deref(), 6)
}

#[rstest]
fn submitted_results_are_shown_on_the_results_page(builtin_engine: SearchEngine) {
    let mut bridge = SessionBridge::new();
    let view = search_and_follow(&builtin_engine, &mut bridge, "TVSH");

    let_assert!(ResultsView::Ranked { query, results } = &view);
    check!(query == "tvsh");
    check!(*results == builtin_engine.search("tvsh"));
    check!(bridge.get(LAST_SEARCH_KEY).as_deref() == Some("tvsh"));
}

#[rstest]
fn restoring_twice_gives_identical_results(builtin_engine: SearchEngine) {
    let mut bridge = SessionBridge::new();
    let first = search_and_follow(&builtin_engine, &mut bridge, "ndryshimi i adresës");
    let second = load_results(&builtin_engine, &bridge, Some("ndryshimi i adresës"), 6);
    let third = load_results(&builtin_engine, &bridge, None, 6);

    check!(first == second);
    check!(second == third);
}

/// Back/forward navigation must not recompute: a results page restored against a
/// different engine still shows what was stored.
#[rstest]
fn restore_does_not_recompute(builtin_engine: SearchEngine) {
    let mut bridge = SessionBridge::new();
    let stored = search_and_follow(&builtin_engine, &mut bridge, "kontributet");

    let other = engine_with_videos(vec![item("other", "Kontributet", "", "", &[])]);
    let restored = load_results(&other, &bridge, Some("kontributet"), 6);

    check!(restored == stored);
}

#[rstest]
fn empty_query_neither_persists_nor_navigates(builtin_engine: SearchEngine) {
    let mut bridge = SessionBridge::new();
    let_assert!(Ok(None) = submit_search(&builtin_engine, &mut bridge, "  "));

    check!(bridge.get(LAST_SEARCH_KEY).is_none());
    check!(bridge.get(LAST_RESULTS_KEY).is_none());
}

#[rstest]
fn results_page_without_query_redirects_home(builtin_engine: SearchEngine) {
    let view = load_results(&builtin_engine, &SessionBridge::new(), None, 6);
    let_assert!(ResultsView::Redirect(target) = view);
    check!(target == Navigation::Home);
    check!(target.url(&Settings::default()).unwrap().path() == "/index.html");
}

#[rstest]
fn no_match_shows_fallback_sample_and_message(builtin_engine: SearchEngine) {
    let mut bridge = SessionBridge::new();
    let view = search_and_follow(&builtin_engine, &mut bridge, "pasaportë");

    let_assert!(ResultsView::Fallback { query, sample } = &view);
    check!(query == "pasaportë");
    check!(sample.len() == 6);
    check!(sample.iter().all(|r| r.score == 0));

    let videos = builtin_engine
        .store()
        .collection(taxguide_search::Collection::Videos);
    check!(sample[0].item == videos[0]);

    let output = format_results(&view);
    check!(output.contains("Nuk u gjetën rezultate për \"pasaportë\""));
    check!(!output.contains("rezultate u gjetën"));
}

#[rstest]
fn ranked_message_counts_results(builtin_engine: SearchEngine) {
    let mut bridge = SessionBridge::new();
    let view = search_and_follow(&builtin_engine, &mut bridge, "selfcare");

    let count = view.items().len();
    check!(count > 0);
    check!(view.message() == Some(format!("{count} rezultate u gjetën")));
}
