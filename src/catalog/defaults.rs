//! Built-in marketplace catalog
//!
//! Process-wide immutable configuration data, built once on first use.
//! Covers the marketplace verticals: product search, stays, tours,
//! affiliate, selling, and inventory.

use once_cell::sync::Lazy;

use super::types::{HelpFlow, HelpStep, HelpTip, Priority, StepPosition, StepTrigger};
use super::Catalog;
use crate::core::keys::{flows, roles};

static DEFAULT: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(tips(), vec![seller_onboarding(), inventory_management(), buyer_experience()])
        .expect("built-in catalog ids are unique")
});

pub fn default_catalog() -> &'static Catalog {
    &DEFAULT
}

fn tip(
    id: &str,
    title: &str,
    content: &str,
    category: &str,
    priority: Priority,
    triggers: &[&str],
    user_types: &[&str],
    show_once: bool,
) -> HelpTip {
    HelpTip {
        id: id.into(),
        title: title.into(),
        content: content.into(),
        category: category.into(),
        priority,
        triggers: triggers.iter().map(|t| (*t).into()).collect(),
        user_types: user_types.iter().map(|t| (*t).to_string()).collect(),
        show_once,
    }
}

fn step(id: &str, title: &str, description: &str, element: Option<&str>, trigger: StepTrigger) -> HelpStep {
    HelpStep {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        element: element.map(|e| e.into()),
        position: StepPosition::Bottom,
        trigger,
        priority: Priority::Medium,
    }
}

fn tips() -> Vec<HelpTip> {
    vec![
        tip(
            "search-filters",
            "Narrow your search",
            "Use the filter panel to narrow results by category, price, and rating.",
            "search",
            Priority::Medium,
            &["/products"],
            &[roles::USER],
            true,
        ),
        tip(
            "product-compare",
            "Compare products",
            "Select up to four products to compare specs side by side.",
            "search",
            Priority::Low,
            &["/products*"],
            &[roles::USER],
            false,
        ),
        tip(
            "booking-calendar",
            "Check availability first",
            "Open the calendar to see which dates are free before requesting a stay.",
            "travel",
            Priority::Medium,
            &["/stays*"],
            &[roles::USER, roles::TRAVELER],
            false,
        ),
        tip(
            "tour-reviews",
            "Read recent reviews",
            "Reviews from the last 90 days reflect the current guide and route.",
            "travel",
            Priority::Low,
            &["/tours*"],
            &[roles::TRAVELER],
            false,
        ),
        tip(
            "affiliate-links",
            "Share and earn",
            "Generate a tracked link from any product page to earn commission.",
            "affiliate",
            Priority::Medium,
            &["/affiliate"],
            &[roles::USER],
            false,
        ),
        tip(
            "listing-quality",
            "Complete listings sell faster",
            "Listings with five or more photos and full attributes rank higher.",
            "selling",
            Priority::High,
            &["/sell*"],
            &[roles::SELLER],
            false,
        ),
        tip(
            "stock-alerts",
            "Set low-stock alerts",
            "Pick a threshold per SKU and get notified before you run out.",
            "inventory",
            Priority::High,
            &["/dashboard/inventory*"],
            &[roles::SELLER],
            true,
        ),
        tip(
            "order-timeline",
            "Track order states",
            "Each order shows its full movement history from placement to delivery.",
            "selling",
            Priority::Medium,
            &["/dashboard/orders*"],
            &[roles::SELLER],
            false,
        ),
        tip(
            "admin-moderation",
            "Moderation queue shortcuts",
            "Press J/K to move through flagged listings without leaving the queue.",
            "admin",
            Priority::Medium,
            &["/admin*"],
            &[roles::ADMIN],
            false,
        ),
    ]
}

fn seller_onboarding() -> HelpFlow {
    HelpFlow {
        id: flows::SELLER_ONBOARDING.into(),
        title: "Start selling".into(),
        description: "Everything needed to publish a first listing.".into(),
        steps: vec![
            step(
                "welcome-greeting",
                "Welcome to selling",
                "This short tour walks you through your first listing.",
                None,
                StepTrigger::Auto,
            ),
            step(
                "create-first-listing",
                "Create a listing",
                "Pick a category and fill in the attribute template.",
                Some("#new-listing-button"),
                StepTrigger::Click,
            ),
            step(
                "set-shipping-profile",
                "Set up shipping",
                "Choose carriers and handling time once; reuse on every listing.",
                Some("#shipping-profile"),
                StepTrigger::Click,
            ),
            step(
                "publish-listing",
                "Publish",
                "Review the preview and publish when ready.",
                Some("#publish-button"),
                StepTrigger::Click,
            ),
        ],
    }
}

fn inventory_management() -> HelpFlow {
    HelpFlow {
        id: flows::INVENTORY_MANAGEMENT.into(),
        title: "Manage inventory".into(),
        description: "Keep stock levels and movements under control.".into(),
        steps: vec![
            step(
                "inventory-overview",
                "Your inventory at a glance",
                "Every SKU with current stock, reserved units, and alerts.",
                None,
                StepTrigger::Auto,
            ),
            step(
                "stock-thresholds",
                "Set thresholds",
                "Low-stock alerts fire when a SKU drops below its threshold.",
                Some("#threshold-input"),
                StepTrigger::Hover,
            ),
            step(
                "movement-log",
                "Audit movements",
                "Each stock change is recorded with reason and timestamp.",
                Some("#movement-log"),
                StepTrigger::Click,
            ),
        ],
    }
}

fn buyer_experience() -> HelpFlow {
    HelpFlow {
        id: flows::BUYER_EXPERIENCE.into(),
        title: "Find what you need".into(),
        description: "A quick tour of browsing, saving, and checkout.".into(),
        steps: vec![
            step(
                "browse-categories",
                "Browse by vertical",
                "Products, stays, and tours each have their own category tree.",
                None,
                StepTrigger::Auto,
            ),
            step(
                "save-favorites",
                "Save favorites",
                "Tap the heart to keep items for later across devices.",
                Some(".favorite-icon"),
                StepTrigger::Hover,
            ),
            step(
                "checkout-basics",
                "Checkout",
                "Cart items from different sellers check out in one order.",
                Some("#cart-button"),
                StepTrigger::Click,
            ),
        ],
    }
}
