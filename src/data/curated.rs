//! Curated recommendation table: faction -> difficulty -> objective -> { roles: role -> category lists }.
//! Sparse by nature; a missing path is an empty block, never an error.

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::data::catalog::string_list;
use crate::data::usage::UsageDataset;

pub const FALLBACK_OBJECTIVES: [&str; 6] = [
    "Destroy Nests",
    "Eliminate Bile Titans",
    "Sabotage Facilities",
    "Escort Convoy",
    "Radiotower Uplink",
    "Extract Samples",
];

#[derive(Debug, Clone, Default)]
pub struct CuratedTable {
    root: Map<String, Value>,
}

/// Suggestions for one role. Each list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuratedRole {
    pub primaries: Vec<String>,
    pub sidearms: Vec<String>,
    pub grenades: Vec<String>,
    pub stratagems: Vec<String>,
    pub boosters: Vec<String>,
    pub armor: Vec<String>,
}

impl CuratedRole {
    fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).map(string_list).unwrap_or_default();
        Self {
            primaries: field("primaries"),
            sidearms: field("sidearms"),
            grenades: field("grenades"),
            stratagems: field("stratagems"),
            boosters: field("boosters"),
            armor: field("armor"),
        }
    }

    /// (category key, names) pairs in a fixed order, for diagnostics.
    pub fn lists(&self) -> [(&'static str, &[String]); 6] {
        [
            ("primaries", self.primaries.as_slice()),
            ("sidearms", self.sidearms.as_slice()),
            ("grenades", self.grenades.as_slice()),
            ("stratagems", self.stratagems.as_slice()),
            ("boosters", self.boosters.as_slice()),
            ("armor", self.armor.as_slice()),
        ]
    }
}

/// Objective options for a faction/difficulty plus the one selected by default.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ObjectiveChoices {
    pub options: Vec<String>,
    pub default: String,
}

impl CuratedTable {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    fn objectives_node(&self, faction: &str, difficulty: &str) -> Option<&Map<String, Value>> {
        self.root
            .get(faction)
            .and_then(|node| node.get(difficulty))
            .and_then(Value::as_object)
    }

    /// Curated role for (faction, difficulty, objective, role), if any.
    pub fn role(&self, faction: &str, difficulty: &str, objective: &str, role_id: &str) -> Option<CuratedRole> {
        self.objectives_node(faction, difficulty)
            .and_then(|objectives| objectives.get(objective))
            .and_then(|block| block.get("roles"))
            .and_then(|roles| roles.get(role_id))
            .filter(|role| role.is_object())
            .map(CuratedRole::from_value)
    }

    pub fn objective_keys(&self, faction: &str, difficulty: &str) -> Vec<String> {
        self.objectives_node(faction, difficulty)
            .map(|objectives| objectives.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Walk every (path, role) pair in the table.
    pub fn for_each_role<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &CuratedRole),
    {
        for (faction, difficulties) in &self.root {
            let Some(difficulties) = difficulties.as_object() else {
                continue;
            };
            for (difficulty, objectives) in difficulties {
                let Some(objectives) = objectives.as_object() else {
                    continue;
                };
                for (objective, block) in objectives {
                    let Some(roles) = block.get("roles").and_then(Value::as_object) else {
                        continue;
                    };
                    for (role_id, role) in roles {
                        let path = format!("{faction} / {difficulty} / {objective} / {role_id}");
                        visit(&path, &CuratedRole::from_value(role));
                    }
                }
            }
        }
    }

    /// Curated keys, then objectives named in the usage dataset, then the fallback list.
    pub fn objective_choices(&self, usage: &UsageDataset, faction: &str, difficulty: &str) -> ObjectiveChoices {
        let mut merged: IndexSet<String> = IndexSet::new();
        merged.extend(self.objective_keys(faction, difficulty));
        merged.extend(usage.objectives());
        merged.extend(FALLBACK_OBJECTIVES.iter().map(|name| name.to_string()));

        let options: Vec<String> = merged.into_iter().collect();
        let default = options
            .iter()
            .find(|option| option.to_lowercase().contains("nest"))
            .or_else(|| options.first())
            .cloned()
            .unwrap_or_else(|| crate::config::DEFAULT_OBJECTIVE.to_string());
        ObjectiveChoices { options, default }
    }
}
