//! Context resolution: who is looking at what
//!
//! `HelpContext` is a derived view, recomputed on every user or route change
//! and never persisted. Resolution is pure and never fails; an absent user
//! yields no context at all, which downstream means no guidance.

use chrono::{DateTime, Duration, Utc};

/// Account age at or below which a user counts as new.
pub const NEW_USER_THRESHOLD_DAYS: i64 = 7;

/// Role assumed when the account record carries none.
pub const DEFAULT_USER_TYPE: &str = "user";

/// The slice of the auth/session boundary the engine consumes.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: String,
    pub role: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub onboarding_completed: bool,
}

impl UserAccount {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), role: None, created_at: None, onboarding_completed: false }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn with_onboarding_completed(mut self, done: bool) -> Self {
        self.onboarding_completed = done;
        self
    }
}

/// Current viewing context, derived from session + navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContext {
    pub page: String,
    pub user_type: String,
    pub is_new_user: bool,
    pub has_seen_onboarding: bool,
}

impl HelpContext {
    pub fn resolve(user: Option<&UserAccount>, route: &str) -> Option<Self> {
        Self::resolve_at(user, route, Utc::now(), NEW_USER_THRESHOLD_DAYS)
    }

    /// Resolution with an explicit clock and threshold, for deterministic
    /// tests and configurable engines.
    pub fn resolve_at(
        user: Option<&UserAccount>,
        route: &str,
        now: DateTime<Utc>,
        threshold_days: i64,
    ) -> Option<Self> {
        let user = user?;
        let is_new_user = match user.created_at {
            Some(created) => now.signed_duration_since(created) <= Duration::days(threshold_days),
            // No creation date: fail open toward showing guidance.
            None => true,
        };
        Some(Self {
            page: route.to_string(),
            user_type: user.role.clone().unwrap_or_else(|| DEFAULT_USER_TYPE.to_string()),
            is_new_user,
            has_seen_onboarding: user.onboarding_completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_user_no_context() {
        assert!(HelpContext::resolve(None, "/products").is_none());
    }

    #[test]
    fn role_defaults_to_user() {
        let account = UserAccount::new("u1");
        let ctx = HelpContext::resolve(Some(&account), "/products").unwrap();
        assert_eq!(ctx.user_type, "user");
        // Missing created_at counts as new.
        assert!(ctx.is_new_user);
    }

    #[test]
    fn new_user_threshold() {
        let now = Utc::now();
        let fresh = UserAccount::new("u1").with_created_at(now - Duration::days(3));
        let stale = UserAccount::new("u2").with_created_at(now - Duration::days(30));

        let ctx = HelpContext::resolve_at(Some(&fresh), "/", now, NEW_USER_THRESHOLD_DAYS).unwrap();
        assert!(ctx.is_new_user);
        let ctx = HelpContext::resolve_at(Some(&stale), "/", now, NEW_USER_THRESHOLD_DAYS).unwrap();
        assert!(!ctx.is_new_user);
    }

    #[test]
    fn carries_onboarding_flag_and_page() {
        let account = UserAccount::new("s1").with_role("seller").with_onboarding_completed(true);
        let ctx = HelpContext::resolve(Some(&account), "/sell").unwrap();
        assert_eq!(ctx.page, "/sell");
        assert_eq!(ctx.user_type, "seller");
        assert!(ctx.has_seen_onboarding);
    }
}
