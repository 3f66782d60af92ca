//! Normalized popularity per item name, derived from the usage dataset.
//!
//! The dataset has no fixed schema: named entries can sit at any depth and carry their
//! count under one of several field names. The walk descends into every object and array;
//! an object with a name contributes its weight (and is not descended further), anything
//! else is searched for more entries. Repeated names sum, then everything is divided by
//! the largest total.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::data::usage::UsageDataset;

/// Field names that identify an entry, first present non-empty string wins.
pub const NAME_FIELDS: [&str; 2] = ["name", "item_name"];
/// Field names carrying the entry's weight, first non-null wins.
pub const WEIGHT_FIELDS: [&str; 4] = ["count", "uses", "usage", "usage_rate"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageWeights {
    weights: HashMap<String, f64>,
}

impl UsageWeights {
    pub fn from_dataset(dataset: &UsageDataset) -> Self {
        Self::from_value(dataset.root())
    }

    pub fn from_value(root: &Value) -> Self {
        let mut totals: HashMap<String, f64> = HashMap::new();
        accumulate(root, &mut totals);

        let max = totals.values().copied().fold(0.0_f64, f64::max);
        let weights = totals
            .into_iter()
            .map(|(name, total)| {
                let normalized = if max > 0.0 { total / max } else { 0.0 };
                (name, normalized)
            })
            .collect();
        Self { weights }
    }

    /// Weight for `name`, 0 when unknown.
    pub fn get(&self, name: &str) -> f64 {
        self.weights.get(name).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(name, weight)| (name.as_str(), *weight))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for UsageWeights {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().map(|(name, weight)| (name.into(), weight)).collect(),
        }
    }
}

fn accumulate(node: &Value, totals: &mut HashMap<String, f64>) {
    match node {
        Value::Array(items) => items.iter().for_each(|item| accumulate(item, totals)),
        Value::Object(map) => match entry_name(map) {
            Some(name) => {
                // Saturate so huge counts cannot sum to infinity.
                let total = totals.entry(name.to_string()).or_insert(0.0);
                *total = (*total + entry_weight(map)).min(f64::MAX);
            }
            None => map.values().for_each(|value| accumulate(value, totals)),
        },
        _ => {}
    }
}

fn entry_name(map: &Map<String, Value>) -> Option<&str> {
    NAME_FIELDS
        .iter()
        .filter_map(|field| map.get(*field).and_then(Value::as_str))
        .find(|name| !name.is_empty())
}

/// First non-null weight field coerced to a number; anything non-finite counts as 1
/// and the result never drops below 1.
fn entry_weight(map: &Map<String, Value>) -> f64 {
    let raw = WEIGHT_FIELDS
        .iter()
        .filter_map(|field| map.get(*field))
        .find(|value| !value.is_null());
    let value = raw.map(coerce_number).unwrap_or(1.0);
    if value.is_finite() {
        value.max(1.0)
    } else {
        1.0
    }
}

fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn weights(value: Value) -> UsageWeights {
        UsageWeights::from_value(&value)
    }

    #[test]
    fn empty_dataset_gives_empty_map() {
        let map = weights(json!({}));
        assert!(map.is_empty());
        assert_eq!(map.get("Anything"), 0.0);
    }

    #[test]
    fn values_are_normalized_to_max() {
        let map = weights(json!({
            "primaries": [{ "name": "Liberator", "count": 40 }, { "name": "Breaker", "count": 10 }]
        }));
        assert_eq!(map.get("Liberator"), 1.0);
        assert_eq!(map.get("Breaker"), 0.25);
        assert!(map.iter().all(|(_, w)| (0.0..=1.0).contains(&w)));
    }

    #[test]
    fn repeated_names_accumulate() {
        let map = weights(json!([
            { "name": "Stim", "uses": 3 },
            { "nested": { "deeper": [{ "name": "Stim", "uses": 3 }, { "name": "Vitality", "uses": 3 }] } }
        ]));
        assert_eq!(map.get("Stim"), 1.0);
        assert_eq!(map.get("Vitality"), 0.5);
    }

    #[test]
    fn first_non_null_field_wins() {
        let map = weights(json!([
            { "name": "A", "count": null, "uses": 8, "usage_rate": 100 },
            { "name": "B", "usage_rate": 4 }
        ]));
        assert_eq!(map.get("A"), 1.0);
        assert_eq!(map.get("B"), 0.5);
    }

    #[test]
    fn bad_weights_floor_at_one() {
        let map = weights(json!([
            { "name": "Top", "count": 4 },
            { "name": "Zero", "count": 0 },
            { "name": "Negative", "count": -7 },
            { "name": "Text", "count": "lots" },
            { "name": "Numeric Text", "count": "2" },
            { "name": "Missing" }
        ]));
        for name in ["Zero", "Negative", "Text", "Missing"] {
            assert_eq!(map.get(name), 0.25, "{name}");
        }
        assert_eq!(map.get("Numeric Text"), 0.5);
    }

    #[test]
    fn overflowing_totals_saturate_at_one() {
        let map = weights(json!([
            { "name": "Big", "count": 1e308 },
            { "name": "Big", "count": 1e308 },
            { "name": "Small", "count": 5 }
        ]));
        assert_eq!(map.get("Big"), 1.0);
        assert!(map.iter().all(|(_, w)| (0.0..=1.0).contains(&w)));

        let candidates = vec!["Small".to_string(), "Big".to_string()];
        let ranked = crate::loadout::ranking::rank_by_usage(&candidates, &map, 0.1);
        assert_eq!(ranked[0], "Big");
    }

    #[test]
    fn entries_without_a_name_are_searched() {
        let map = weights(json!({ "a": { "name": "", "items": [{ "name": "Real" }] } }));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Real"), 1.0);
    }
}
