//! Catalog: static, read-only registry of tips and flows
//!
//! The catalog is immutable after construction. Construction validates that
//! tip ids are unique across the catalog and step ids are unique within each
//! flow. Tip order matters: it is the tie-break when priorities are equal.

mod defaults;
mod types;

pub use defaults::default_catalog;
pub use types::{HelpFlow, HelpStep, HelpTip, Priority, StepPosition, StepTrigger};

use anyhow::{bail, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tips: Vec<HelpTip>,
    flows: BTreeMap<String, HelpFlow>,
    flow_order: Vec<String>,
}

/// Raw catalog definition (for deserialization)
#[derive(Debug, Clone, Deserialize)]
struct CatalogDef {
    #[serde(default)]
    tips: Vec<HelpTip>,
    #[serde(default)]
    flows: Vec<HelpFlow>,
}

impl Catalog {
    pub fn new(tips: Vec<HelpTip>, flows: Vec<HelpFlow>) -> Result<Self> {
        let mut tip_ids = HashSet::new();
        for tip in &tips {
            if !tip_ids.insert(tip.id.as_str()) {
                bail!("duplicate tip id '{}'", tip.id);
            }
        }

        let mut flow_order = Vec::with_capacity(flows.len());
        let mut flow_map = BTreeMap::new();
        for flow in flows {
            let mut step_ids = HashSet::new();
            for step in &flow.steps {
                if !step_ids.insert(step.id.as_str()) {
                    bail!("duplicate step id '{}' in flow '{}'", step.id, flow.id);
                }
            }
            if flow_map.contains_key(&flow.id) {
                bail!("duplicate flow id '{}'", flow.id);
            }
            flow_order.push(flow.id.clone());
            flow_map.insert(flow.id.clone(), flow);
        }

        Ok(Self { tips, flows: flow_map, flow_order })
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let def: CatalogDef = serde_json::from_value(value)?;
        Self::new(def.tips, def.flows)
    }

    pub fn tips(&self) -> &[HelpTip] {
        &self.tips
    }

    pub fn tip(&self, id: &str) -> Option<&HelpTip> {
        self.tips.iter().find(|t| t.id == id)
    }

    pub fn flow(&self, id: &str) -> Option<&HelpFlow> {
        self.flows.get(id)
    }

    pub fn flows(&self) -> impl Iterator<Item = &HelpFlow> {
        self.flow_order.iter().filter_map(|id| self.flows.get(id))
    }

    /// Linear scan across all flows' steps. The catalog is small and static,
    /// so no index is kept.
    pub fn lookup_step(&self, step_id: &str) -> Option<&HelpStep> {
        self.flows()
            .flat_map(|f| f.steps.iter())
            .find(|s| s.id == step_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_duplicate_tip_ids() {
        let tip = |id: &str| HelpTip {
            id: id.into(),
            title: "T".into(),
            content: "C".into(),
            category: "search".into(),
            priority: Priority::Low,
            triggers: vec!["/products".into()],
            user_types: vec!["user".into()],
            show_once: false,
        };
        let err = Catalog::new(vec![tip("a"), tip("a")], vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate tip id"));
    }

    #[test]
    fn loads_from_json() {
        let catalog = Catalog::from_value(json!({
            "tips": [{
                "id": "search-filters",
                "title": "Narrow your search",
                "content": "Use the filter panel to narrow results.",
                "category": "search",
                "priority": "medium",
                "triggers": ["/products"],
                "user_types": ["user"],
                "show_once": true
            }],
            "flows": [{
                "id": "demo",
                "title": "Demo",
                "description": "Demo flow",
                "steps": [{
                    "id": "step-1",
                    "title": "First",
                    "description": "First step",
                    "position": "bottom",
                    "trigger": "auto",
                    "priority": "high"
                }]
            }]
        }))
        .unwrap();

        assert_eq!(catalog.tips().len(), 1);
        assert!(catalog.tip("search-filters").unwrap().show_once);
        assert_eq!(catalog.lookup_step("step-1").unwrap().title, "First");
        assert!(catalog.lookup_step("missing").is_none());
    }

    #[test]
    fn default_catalog_is_valid() {
        let catalog = default_catalog();
        assert!(!catalog.tips().is_empty());
        // The seller onboarding walkthrough starts with the greeting step.
        let flow = catalog.flow("seller-onboarding").unwrap();
        assert_eq!(flow.steps[0].id, "welcome-greeting");
    }
}
