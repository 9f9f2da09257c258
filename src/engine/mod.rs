//! HelpEngine: one owned service wiring catalog, context, store, and timer
//!
//! The engine is the single writer of persisted help state. The presentation
//! layer reads derived tip lists and calls engine actions (dismiss,
//! complete); it never touches storage directly.
//!
//! # Event flow
//!
//! ```text
//! set_user / navigate
//!       │
//!       ▼
//! HelpContext::resolve ──► selector::active_tips ──► session tip list
//!       │
//!       └── arm AutoDisplay (if no flow active)
//!                │ tick()
//!                ▼
//!        selector::select_flow ──► active_help persisted
//! ```

mod timer;

pub use timer::{AutoDisplay, TimerState};

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;

use crate::catalog::{Catalog, HelpFlow, HelpStep, HelpTip};
use crate::context::{HelpContext, UserAccount, NEW_USER_THRESHOLD_DAYS};
use crate::selector;
use crate::store::{ProgressState, ProgressStore, Storage};

/// Engine configuration. Higher layers construct this.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Ticks between entering a route and auto-displaying a flow.
    pub arm_delay_ticks: u32,
    /// Account age at or below which a user counts as new.
    pub new_user_threshold_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { arm_delay_ticks: 1, new_user_threshold_days: NEW_USER_THRESHOLD_DAYS }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arm_delay_ticks(mut self, ticks: u32) -> Self {
        self.arm_delay_ticks = ticks;
        self
    }

    pub fn with_new_user_threshold_days(mut self, days: i64) -> Self {
        self.new_user_threshold_days = days;
        self
    }
}

pub struct HelpEngine {
    catalog: Arc<Catalog>,
    store: ProgressStore,
    config: EngineConfig,
    user: Option<UserAccount>,
    route: String,
    context: Option<HelpContext>,
    session_tips: Vec<HelpTip>,
    timer: AutoDisplay,
}

impl HelpEngine {
    pub fn new(catalog: Catalog, storage: Box<dyn Storage>) -> Self {
        Self::with_config(catalog, storage, EngineConfig::default())
    }

    pub fn with_config(catalog: Catalog, storage: Box<dyn Storage>, config: EngineConfig) -> Self {
        let timer = AutoDisplay::new(config.arm_delay_ticks);
        Self {
            catalog: Arc::new(catalog),
            store: ProgressStore::open(storage),
            config,
            user: None,
            route: "/".to_string(),
            context: None,
            session_tips: Vec::new(),
            timer,
        }
    }

    /// Auth-state change. Recomputes context and the session tip list.
    pub fn set_user(&mut self, user: Option<UserAccount>) {
        self.user = user;
        self.refresh();
    }

    /// Navigation event. Recomputes context and the session tip list; any
    /// pending auto-display for the previous route is cancelled.
    pub fn navigate(&mut self, route: &str) {
        self.route = route.to_string();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.context = HelpContext::resolve_at(
            self.user.as_ref(),
            &self.route,
            Utc::now(),
            self.config.new_user_threshold_days,
        );
        self.session_tips = selector::active_tips(&self.catalog, self.context.as_ref(), self.store.state());
        self.timer.cancel();
        if self.context.is_some() && self.store.state().active_help.is_none() {
            self.timer.arm();
        }
    }

    /// Host-driven tick. On the tick that exhausts the arm delay, the
    /// guided-flow decision table runs against the current context; a hit
    /// persists `active_help`.
    pub fn tick(&mut self) -> Result<()> {
        if !self.timer.tick() {
            return Ok(());
        }
        let Some(ctx) = self.context.clone() else {
            return Ok(());
        };
        if self.store.state().active_help.is_some() {
            return Ok(());
        }
        let selected = selector::select_flow(&self.catalog, &ctx, self.store.state()).map(|f| f.id.clone());
        if let Some(id) = selected {
            tracing::info!("auto-display: activating flow '{}' on {}", id, ctx.page);
            self.store.set_active(&id)?;
            self.timer.activated();
        }
        Ok(())
    }

    pub fn context(&self) -> Option<&HelpContext> {
        self.context.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn progress(&self) -> &ProgressState {
        self.store.state()
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// The session tip list, as computed at the last context change minus
    /// any tips dismissed since.
    pub fn active_tips(&self) -> &[HelpTip] {
        &self.session_tips
    }

    /// Removes the tip from the session list and records it as shown.
    /// Dismissal implies shown bookkeeping even without `show_once`; the tip
    /// stays hidden for this session and reappears on the next context
    /// recomputation unless `show_once` suppresses it for good.
    pub fn dismiss(&mut self, tip_id: &str) -> Result<()> {
        self.session_tips.retain(|t| t.id != tip_id);
        self.store.mark_shown(tip_id)?;
        Ok(())
    }

    /// Shown bookkeeping without dismissal (presentation calls this when it
    /// actually renders a tip).
    pub fn mark_shown(&mut self, tip_id: &str) -> Result<()> {
        self.store.mark_shown(tip_id)?;
        Ok(())
    }

    pub fn active_flow(&self) -> Option<&HelpFlow> {
        self.store.state().active_help.as_deref().and_then(|id| self.catalog.flow(id))
    }

    /// First step of the active flow not yet completed.
    pub fn next_step(&self) -> Option<&HelpStep> {
        self.active_flow().and_then(|flow| selector::next_step(flow, self.store.state()))
    }

    /// Completion percentage of the active flow, 0 when none is active.
    pub fn flow_progress(&self) -> f64 {
        self.active_flow()
            .map(|flow| selector::flow_progress(flow, self.store.state()))
            .unwrap_or(0.0)
    }

    /// Idempotently records a step complete. When every step of the active
    /// flow is done the flow deactivates and the timer parks in Completed.
    pub fn complete_step(&mut self, step_id: &str) -> Result<()> {
        self.store.complete_step(step_id)?;
        let Some(active) = self.store.state().active_help.clone() else {
            return Ok(());
        };
        let catalog = self.catalog.clone();
        let Some(flow) = catalog.flow(&active) else {
            return Ok(());
        };
        let pct = selector::flow_progress(flow, self.store.state());
        self.store.set_progress(&active, pct)?;
        if pct >= 100.0 {
            tracing::info!("flow '{}' completed", active);
            self.store.clear_active()?;
            self.timer.completed();
        }
        Ok(())
    }

    /// Permanently dismisses a flow and deactivates it if active.
    pub fn dismiss_flow(&mut self, flow_id: &str) -> Result<()> {
        self.store.dismiss_flow(flow_id)?;
        self.timer.dismissed();
        Ok(())
    }

    /// Support/testing operation: wipes all persisted help state.
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset()?;
        self.refresh();
        Ok(())
    }
}
