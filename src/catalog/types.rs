//! Catalog records: tips, flows, steps

use serde::{Deserialize, Serialize};

use crate::core::route::RoutePattern;

/// Sort and visual-treatment priority. Weights are fixed: high=3, medium=2,
/// low=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// A single dismissible contextual hint tied to routes and roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpTip {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub priority: Priority,
    pub triggers: Vec<RoutePattern>,
    pub user_types: Vec<String>,
    #[serde(default)]
    pub show_once: bool,
}

impl HelpTip {
    pub fn visible_to(&self, user_type: &str) -> bool {
        self.user_types.iter().any(|t| t == user_type)
    }

    pub fn triggered_by(&self, route: &str) -> bool {
        self.triggers.iter().any(|t| t.matches(route))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepTrigger {
    Hover,
    Click,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// One step of a guided walkthrough. `element` is an opaque selector the
/// presentation layer resolves; the engine never queries the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    pub position: StepPosition,
    pub trigger: StepTrigger,
    pub priority: Priority,
}

/// An ordered onboarding walkthrough. Step order is significant and never
/// reordered at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpFlow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<HelpStep>,
}
