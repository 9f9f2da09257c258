//! Storage keys, flow ids, routes, and role names
//!
//! Centralized registry so the selector, engine, and default catalog agree
//! on identifiers.

/// Persisted state keys
pub mod storage {
    pub const STATE: &str = "help-progress";
}

/// Guided flow ids
pub mod flows {
    pub const SELLER_ONBOARDING: &str = "seller-onboarding";
    pub const INVENTORY_MANAGEMENT: &str = "inventory-management";
    pub const BUYER_EXPERIENCE: &str = "buyer-experience";
}

/// Routes the guided-flow decision table keys on
pub mod routes {
    pub const SELL: &str = "/sell";
    pub const INVENTORY_PREFIX: &str = "/dashboard/inventory";
    pub const PRODUCTS_PREFIX: &str = "/products";
}

/// Role names as resolved into `HelpContext::user_type`
pub mod roles {
    pub const USER: &str = "user";
    pub const SELLER: &str = "seller";
    pub const ADMIN: &str = "admin";
    pub const TRAVELER: &str = "traveler";
}
