//! Progress store persistence suite
//!
//! Test 1: mark_shown idempotence through the file backend
//! Test 2: full round-trip of all persisted sets across reload
//! Test 3: corrupt snapshot on disk loads as empty state
//! Test 4: reset empties the persisted snapshot, not just memory

use guidepost::{FileStorage, ProgressStore, Storage};
use std::fs;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> ProgressStore {
    ProgressStore::open(Box::new(FileStorage::open_in(dir.path()).expect("storage")))
}

/// Test 1: calling mark_shown twice persists the same set as calling it once
#[test]
fn mark_shown_idempotent_across_reload() {
    let dir = TempDir::new().expect("tempdir");

    let mut store = open_store(&dir);
    store.mark_shown("search-filters").expect("mark");
    let after_once = open_store(&dir).state().clone();

    let mut store = open_store(&dir);
    store.mark_shown("search-filters").expect("mark");
    let after_twice = open_store(&dir).state().clone();

    assert_eq!(after_once, after_twice);
    assert!(after_twice.shown_tips.contains("search-filters"));
}

/// Test 2: every set survives serialization and reload unchanged
#[test]
fn state_round_trips_through_storage() {
    let dir = TempDir::new().expect("tempdir");

    let mut store = open_store(&dir);
    store.mark_shown("tip-a").expect("mark");
    store.mark_shown("tip-b").expect("mark");
    store.complete_step("welcome-greeting").expect("complete");
    store.dismiss_flow("buyer-experience").expect("dismiss");
    store.set_active("seller-onboarding").expect("activate");
    store.set_progress("seller-onboarding", 25.0).expect("progress");
    let before = store.state().clone();

    let reloaded = open_store(&dir);
    assert_eq!(reloaded.state(), &before);
    assert_eq!(reloaded.state().active_help.as_deref(), Some("seller-onboarding"));
}

/// Test 3: an unparseable blob on disk is treated as empty initial state
#[test]
fn corrupt_blob_loads_empty() {
    let dir = TempDir::new().expect("tempdir");
    let storage = FileStorage::open_in(dir.path()).expect("storage");
    storage.set("help-progress", "{\"shown_tips\": 42}").expect("write");

    let store = ProgressStore::open(Box::new(FileStorage::open_in(dir.path()).expect("storage")));
    assert!(store.state().shown_tips.is_empty());
    assert!(store.state().active_help.is_none());
}

/// Test 4: reset persists the wipe
#[test]
fn reset_persists_empty_state() {
    let dir = TempDir::new().expect("tempdir");

    let mut store = open_store(&dir);
    store.mark_shown("tip-a").expect("mark");
    store.set_active("seller-onboarding").expect("activate");
    store.reset().expect("reset");

    let reloaded = open_store(&dir);
    assert!(reloaded.state().shown_tips.is_empty());
    assert!(reloaded.state().active_help.is_none());

    // The blob itself is the default snapshot, not a deleted file.
    let raw = fs::read_to_string(dir.path().join("help-progress.json")).expect("blob");
    assert!(raw.contains("\"shown_tips\":[]"));
}
