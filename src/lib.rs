//! Guidepost: contextual help and onboarding engine for marketplace UIs.
//!
//! # Architecture
//!
//! ```text
//! HelpEngine (single owned service)
//!   │
//!   ├── Catalog (immutable registry)
//!   │     ├── tips  (route/role triggers, priority, show_once)
//!   │     └── flows (ordered onboarding steps)
//!   │
//!   ├── HelpContext (derived: route + role + new-user status)
//!   │
//!   ├── ProgressStore ──► Storage port
//!   │     ├── FileStorage  (one JSON blob per key)
//!   │     └── MemoryStorage
//!   │
//!   └── AutoDisplay (tick-driven one-shot timer)
//! ```
//!
//! # Data flow
//!
//! Navigation or auth change → context resolves → the selector filters the
//! catalog against context + progress state → the presentation layer reads
//! `active_tips()` / `next_step()` and renders. Dismiss/complete actions
//! write back through the engine into the persisted progress snapshot. The
//! engine is synchronous and single-threaded; the only time-like construct
//! is the cancellable auto-display delay, driven by host ticks.
//!
//! # Usage
//!
//! ```
//! use guidepost::{default_catalog, HelpEngine, MemoryStorage, UserAccount};
//!
//! let mut engine = HelpEngine::new(default_catalog().clone(), Box::new(MemoryStorage::new()));
//! engine.set_user(Some(UserAccount::new("u1").with_role("seller")));
//! engine.navigate("/dashboard/inventory");
//!
//! for tip in engine.active_tips() {
//!     println!("{}: {}", tip.title, tip.content);
//! }
//! engine.tick().unwrap(); // arm delay elapsed; a guided flow may activate
//! ```

pub mod catalog;
pub mod context;
pub mod core;
pub mod engine;
pub mod logging;
pub mod selector;
pub mod store;

pub use catalog::{
    default_catalog, Catalog, HelpFlow, HelpStep, HelpTip, Priority, StepPosition, StepTrigger,
};
pub use context::{HelpContext, UserAccount, DEFAULT_USER_TYPE, NEW_USER_THRESHOLD_DAYS};
pub use core::route::RoutePattern;
pub use engine::{AutoDisplay, EngineConfig, HelpEngine, TimerState};
pub use store::{FileStorage, MemoryStorage, ProgressState, ProgressStore, Storage, StorageError};
