//! Item catalog: named top-level categories holding flat or grouped lists of item names.
//! Loaded once per session; every accessor tolerates missing or oddly shaped categories.

use serde_json::{Map, Value};

pub const PRIMARIES: &str = "primaries";
pub const SIDEARMS: &str = "sidearms";
pub const EXPLOSIVES: &str = "explosives";
pub const BOOSTERS: &str = "boosters";
pub const ARMOR: &str = "armor";
pub const STRATAGEMS: &str = "stratagems";

/// Categories that contribute to the whitelist, in flattening order.
pub const CATALOG_CATEGORIES: [&str; 6] = [PRIMARIES, SIDEARMS, EXPLOSIVES, BOOSTERS, ARMOR, STRATAGEMS];

pub const ALL_GROUP: &str = "all";
pub const GRENADES_GROUP: &str = "grenades";

/// Stratagem sub-pools merged into one candidate pool, `all` last.
pub const STRATAGEM_GROUPS: [&str; 5] = ["turrets", "bombardments", "deployables", "backpacks", ALL_GROUP];

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    root: Map<String, Value>,
}

impl ItemCatalog {
    /// Anything that is not a JSON object becomes an empty catalog.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    pub fn category(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.root.contains_key(name)
    }

    /// Names in `category.group`. A category that is itself a flat list answers for `all`.
    pub fn group(&self, category: &str, group: &str) -> Vec<String> {
        match self.category(category) {
            Some(Value::Object(groups)) => groups.get(group).map(string_list).unwrap_or_default(),
            Some(list @ Value::Array(_)) if group == ALL_GROUP => string_list(list),
            _ => Vec::new(),
        }
    }

    pub fn all(&self, category: &str) -> Vec<String> {
        self.group(category, ALL_GROUP)
    }

    /// Every list reachable one or two levels under `category`, in document order.
    pub fn flatten_category(&self, category: &str) -> Vec<String> {
        let mut names = Vec::new();
        match self.category(category) {
            Some(list @ Value::Array(_)) => names.extend(string_list(list)),
            Some(Value::Object(groups)) => {
                for group in groups.values() {
                    match group {
                        Value::Array(_) => names.extend(string_list(group)),
                        Value::Object(inner) => {
                            for nested in inner.values() {
                                names.extend(string_list(nested));
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        names
    }

    pub fn primaries(&self) -> Vec<String> {
        self.all(PRIMARIES)
    }

    pub fn sidearms(&self) -> Vec<String> {
        self.all(SIDEARMS)
    }

    pub fn boosters(&self) -> Vec<String> {
        self.all(BOOSTERS)
    }

    pub fn armor(&self) -> Vec<String> {
        self.all(ARMOR)
    }

    /// `explosives.grenades` followed by `explosives.all`.
    pub fn grenade_pool(&self) -> Vec<String> {
        let mut pool = self.group(EXPLOSIVES, GRENADES_GROUP);
        pool.extend(self.all(EXPLOSIVES));
        pool
    }

    pub fn stratagem_pool(&self) -> Vec<String> {
        STRATAGEM_GROUPS
            .iter()
            .flat_map(|group| self.group(STRATAGEMS, group))
            .collect()
    }
}

/// String entries of a JSON array; anything else is skipped.
pub(crate) fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
