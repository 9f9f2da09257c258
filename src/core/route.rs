//! Route triggers: exact path match, or prefix match with a trailing `*`

use serde::{Deserialize, Serialize};

/// A route-matching rule attached to a tip or flow.
///
/// `/products` matches only `/products`; `/products*` matches any route
/// beginning with `/products`. Parsing never fails - an arbitrary string is
/// simply an exact-match pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePattern {
    raw: String,
}

impl RoutePattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { raw: pattern.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, route: &str) -> bool {
        match self.raw.strip_suffix('*') {
            Some(prefix) => route.starts_with(prefix),
            None => route == self.raw,
        }
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}
