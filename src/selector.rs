//! Tip selection: filter, sort, and the guided-flow decision table

use crate::catalog::{Catalog, HelpFlow, HelpStep, HelpTip};
use crate::context::HelpContext;
use crate::core::keys::{flows, roles, routes};
use crate::store::ProgressState;

/// Flat-tip mode: the eligible, ordered tip list for a context.
///
/// No context (unauthenticated) yields an empty list. Eligible tips are
/// sorted descending by priority weight; the sort is stable, so catalog
/// order is the sole tie-break - it decides which tip is presented first
/// when only one slot is visible.
pub fn active_tips(catalog: &Catalog, context: Option<&HelpContext>, state: &ProgressState) -> Vec<HelpTip> {
    let Some(ctx) = context else {
        return Vec::new();
    };
    let mut tips: Vec<HelpTip> = catalog
        .tips()
        .iter()
        .filter(|t| t.visible_to(&ctx.user_type))
        .filter(|t| t.triggered_by(&ctx.page))
        .filter(|t| !(t.show_once && state.shown_tips.contains(&t.id)))
        .cloned()
        .collect();
    tips.sort_by_key(|t| std::cmp::Reverse(t.priority.weight()));
    tips
}

/// Guided-flow mode: at most one flow for a context.
///
/// Dismissed and fully completed flows are never re-selected. Callers
/// enforce exclusivity by only asking while no flow is active.
pub fn select_flow<'a>(
    catalog: &'a Catalog,
    context: &HelpContext,
    state: &ProgressState,
) -> Option<&'a HelpFlow> {
    let candidate = decide(context)?;
    if state.dismissed_help.contains(candidate) {
        return None;
    }
    let flow = catalog.flow(candidate)?;
    // A walkthrough the user already finished has no step left to show.
    if !flow.steps.is_empty() && flow.steps.iter().all(|s| state.completed_steps.contains(&s.id)) {
        return None;
    }
    Some(flow)
}

/// The decision table. Precedence is authoritative:
/// seller-onboarding > inventory-management > buyer-experience > none.
fn decide(ctx: &HelpContext) -> Option<&'static str> {
    if ctx.user_type == roles::SELLER
        && ctx.is_new_user
        && !ctx.has_seen_onboarding
        && ctx.page == routes::SELL
    {
        return Some(flows::SELLER_ONBOARDING);
    }
    if ctx.user_type == roles::SELLER && ctx.page.starts_with(routes::INVENTORY_PREFIX) {
        return Some(flows::INVENTORY_MANAGEMENT);
    }
    if ctx.user_type == roles::USER && ctx.is_new_user && ctx.page.starts_with(routes::PRODUCTS_PREFIX) {
        return Some(flows::BUYER_EXPERIENCE);
    }
    None
}

/// First step, in catalog order, not yet completed.
pub fn next_step<'a>(flow: &'a HelpFlow, state: &ProgressState) -> Option<&'a HelpStep> {
    flow.steps.iter().find(|s| !state.completed_steps.contains(&s.id))
}

/// Completion percentage, computed fresh on every call.
pub fn flow_progress(flow: &HelpFlow, state: &ProgressState) -> f64 {
    if flow.steps.is_empty() {
        return 0.0;
    }
    let done = flow.steps.iter().filter(|s| state.completed_steps.contains(&s.id)).count();
    done as f64 * 100.0 / flow.steps.len() as f64
}
