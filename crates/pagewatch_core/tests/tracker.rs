use std::sync::Once;

use pagewatch_core::{ChangeTracker, Observation};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(watch_logging::initialize_for_tests);
}

const URL: &str = "https://example.com/page";

#[test]
fn first_observation_seeds_the_baseline() {
    init_logging();
    let mut tracker = ChangeTracker::new();

    assert_eq!(tracker.observe(URL, "hello"), Observation::Seeded);
    assert_eq!(tracker.snapshot(URL), Some("hello"));
}

#[test]
fn identical_reobservation_is_unchanged() {
    init_logging();
    let mut tracker = ChangeTracker::new();

    tracker.observe(URL, "hello");
    assert_eq!(tracker.observe(URL, "hello"), Observation::Unchanged);
    assert_eq!(tracker.snapshot(URL), Some("hello"));
}

#[test]
fn changed_text_returns_previous_and_replaces_snapshot() {
    init_logging();
    let mut tracker = ChangeTracker::new();

    tracker.observe(URL, "old text");
    assert_eq!(
        tracker.observe(URL, "new text"),
        Observation::Changed {
            previous: "old text".to_string(),
        }
    );
    assert_eq!(tracker.snapshot(URL), Some("new text"));
    // Re-observing the replaced snapshot is quiet again.
    assert_eq!(tracker.observe(URL, "new text"), Observation::Unchanged);
}

#[test]
fn equality_is_exact_including_whitespace() {
    init_logging();
    let mut tracker = ChangeTracker::new();

    tracker.observe(URL, "hello");
    assert!(matches!(
        tracker.observe(URL, "hello "),
        Observation::Changed { .. }
    ));
}

#[test]
fn urls_are_tracked_independently() {
    init_logging();
    let mut tracker = ChangeTracker::new();

    tracker.observe("https://a.example.com", "a");
    assert_eq!(
        tracker.observe("https://b.example.com", "a"),
        Observation::Seeded
    );
}

#[test]
fn separate_trackers_never_share_snapshots() {
    init_logging();
    let mut first = ChangeTracker::new();
    let mut second = ChangeTracker::new();

    first.observe(URL, "v1");
    second.observe(URL, "v1");

    // A change seen by the first tracker leaves the second one stale-free.
    assert!(matches!(
        first.observe(URL, "v2"),
        Observation::Changed { .. }
    ));
    assert_eq!(second.observe(URL, "v1"), Observation::Unchanged);
}
