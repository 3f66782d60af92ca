//! Community usage dataset. Schema is not guaranteed, so it stays a raw JSON tree.

use indexmap::IndexSet;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct UsageDataset {
    root: Value,
}

impl UsageDataset {
    /// `null` is treated as an empty object.
    pub fn from_value(value: Value) -> Self {
        let root = if value.is_null() {
            Value::Object(Default::default())
        } else {
            value
        };
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Every string `objective` field at any depth, first occurrence first.
    pub fn objectives(&self) -> Vec<String> {
        let mut found = IndexSet::new();
        collect_objectives(&self.root, &mut found);
        found.into_iter().collect()
    }
}

fn collect_objectives(node: &Value, found: &mut IndexSet<String>) {
    match node {
        Value::Array(items) => items.iter().for_each(|item| collect_objectives(item, found)),
        Value::Object(map) => {
            if let Some(objective) = map.get("objective").and_then(Value::as_str) {
                found.insert(objective.to_string());
            }
            map.values().for_each(|value| collect_objectives(value, found));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objectives_found_at_any_depth() {
        let usage = UsageDataset::from_value(json!({
            "objective": "Extract Samples",
            "seasons": [{ "games": [{ "objective": "Destroy Nests" }, { "objective": 4 }] }]
        }));
        assert_eq!(usage.objectives(), vec!["Extract Samples", "Destroy Nests"]);
    }

    #[test]
    fn null_becomes_empty_object() {
        let usage = UsageDataset::from_value(Value::Null);
        assert!(usage.root().as_object().is_some_and(|map| map.is_empty()));
        assert!(usage.objectives().is_empty());
    }
}
