//! Dismissal/progress store: durable local state behind a Storage port
//!
//! Every mutation is a full read-modify-write of one JSON snapshot under a
//! fixed key. A corrupt or missing snapshot loads as empty state; the engine
//! never errors on load. The store is exclusively owned by the engine - the
//! presentation layer goes through engine actions, never through here.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::core::keys::storage as keys;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("state encode: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage backend: {0}")]
    Backend(String),
}

/// Local durable key-value port. Synchronous by contract; implementations
/// are in-process (file, memory) with no network I/O.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The persisted snapshot. BTree collections keep serialization stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    #[serde(default)]
    pub shown_tips: BTreeSet<String>,
    #[serde(default)]
    pub dismissed_help: BTreeSet<String>,
    #[serde(default)]
    pub completed_steps: BTreeSet<String>,
    #[serde(default)]
    pub user_progress: BTreeMap<String, f64>,
    #[serde(default)]
    pub active_help: Option<String>,
}

pub struct ProgressStore {
    storage: Box<dyn Storage>,
    state: ProgressState,
}

impl ProgressStore {
    /// Load state from storage. Missing or unparseable snapshots start empty.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let state = match storage.get(keys::STATE) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("help state corrupt, starting empty: {}", e);
                ProgressState::default()
            }),
            Ok(None) => ProgressState::default(),
            Err(e) => {
                tracing::warn!("help state unreadable, starting empty: {}", e);
                ProgressState::default()
            }
        };
        Self { storage, state }
    }

    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStorage::new()))
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Idempotent: recording a tip as shown twice is the same as once.
    pub fn mark_shown(&mut self, tip_id: &str) -> Result<(), StorageError> {
        self.state.shown_tips.insert(tip_id.to_string());
        self.persist()
    }

    pub fn complete_step(&mut self, step_id: &str) -> Result<(), StorageError> {
        self.state.completed_steps.insert(step_id.to_string());
        self.persist()
    }

    /// Records the flow as dismissed and deactivates it if it was active.
    pub fn dismiss_flow(&mut self, flow_id: &str) -> Result<(), StorageError> {
        self.state.dismissed_help.insert(flow_id.to_string());
        if self.state.active_help.as_deref() == Some(flow_id) {
            self.state.active_help = None;
        }
        self.persist()
    }

    pub fn set_active(&mut self, flow_id: &str) -> Result<(), StorageError> {
        self.state.active_help = Some(flow_id.to_string());
        self.persist()
    }

    pub fn clear_active(&mut self) -> Result<(), StorageError> {
        self.state.active_help = None;
        self.persist()
    }

    pub fn set_progress(&mut self, flow_id: &str, percent: f64) -> Result<(), StorageError> {
        self.state.user_progress.insert(flow_id.to_string(), percent);
        self.persist()
    }

    /// Clears everything. Support/testing operation.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.state = ProgressState::default();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.state)?;
        self.storage.set(keys::STATE, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_shown_is_idempotent() {
        let mut store = ProgressStore::in_memory();
        store.mark_shown("search-filters").unwrap();
        let once = store.state().clone();
        store.mark_shown("search-filters").unwrap();
        assert_eq!(store.state(), &once);
    }

    #[test]
    fn dismiss_flow_clears_matching_active() {
        let mut store = ProgressStore::in_memory();
        store.set_active("seller-onboarding").unwrap();
        store.dismiss_flow("buyer-experience").unwrap();
        assert_eq!(store.state().active_help.as_deref(), Some("seller-onboarding"));
        store.dismiss_flow("seller-onboarding").unwrap();
        assert!(store.state().active_help.is_none());
    }

    #[test]
    fn corrupt_snapshot_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(keys::STATE, "not json {{{").unwrap();
        let store = ProgressStore::open(Box::new(storage));
        assert_eq!(store.state(), &ProgressState::default());
    }

    #[test]
    fn unknown_ids_are_safe_no_ops_semantically() {
        let mut store = ProgressStore::in_memory();
        // Ids that match no catalog entry still land in the sets harmlessly.
        store.complete_step("no-such-step").unwrap();
        store.dismiss_flow("no-such-flow").unwrap();
        assert!(store.state().completed_steps.contains("no-such-step"));
    }

    #[test]
    fn reset_clears_all_sets() {
        let mut store = ProgressStore::in_memory();
        store.mark_shown("a").unwrap();
        store.complete_step("b").unwrap();
        store.set_active("c").unwrap();
        store.reset().unwrap();
        assert_eq!(store.state(), &ProgressState::default());
    }
}
