pub mod booster;
pub mod challenge;
pub mod grenade;
pub mod ranking;
pub mod rng;
pub mod role_picker;
pub mod rules;
pub mod squad;
pub mod synergy;
pub mod weights;
pub mod whitelist;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DIFFICULTY, DEFAULT_FACTION, DEFAULT_OBJECTIVE};
use crate::data::catalog::ItemCatalog;
use crate::data::curated::CuratedTable;
use crate::loadout::booster::{enforce_booster_cap, RepairOutcome};
use crate::loadout::ranking::rank_by_usage;
use crate::loadout::role_picker::pick_for_role;
use crate::loadout::rules::LoadoutRules;
use crate::loadout::squad::{Role, RoleAssignment, Squad};
use crate::loadout::synergy::SynergyMode;
use crate::loadout::weights::UsageWeights;
use crate::loadout::whitelist::Whitelist;

pub use challenge::{build_challenge_squad, ChallengeRequest};

/// Read-only inputs shared by every squad builder.
#[derive(Debug, Clone, Copy)]
pub struct SquadInputs<'a> {
    pub catalog: &'a ItemCatalog,
    pub weights: &'a UsageWeights,
    pub whitelist: &'a Whitelist,
    pub rules: &'a LoadoutRules,
}

impl SquadInputs<'_> {
    /// Every catalog booster ranked by usage alone, the order booster repair walks.
    pub fn ranked_boosters(&self) -> Vec<String> {
        rank_by_usage(&self.catalog.boosters(), self.weights, self.rules.base_bias)
    }
}

/// Selection for the curated ("finder") flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinderRequest {
    pub faction: String,
    pub difficulty: String,
    pub objective: String,
    #[serde(default)]
    pub synergy: SynergyMode,
    #[serde(default = "default_true")]
    pub enforce_faction_grenades: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FinderRequest {
    fn default() -> Self {
        Self {
            faction: DEFAULT_FACTION.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            objective: DEFAULT_OBJECTIVE.to_string(),
            synergy: SynergyMode::Balanced,
            enforce_faction_grenades: true,
        }
    }
}

/// Curated squad: one assignment per fixed role, then the booster cap pass.
pub fn build_finder_squad(inputs: &SquadInputs<'_>, curated: &CuratedTable, request: &FinderRequest) -> Squad {
    let mut squad: Squad = Role::ALL
        .into_iter()
        .map(|role| {
            let curated_role = curated.role(&request.faction, &request.difficulty, &request.objective, role.id());
            pick_for_role(inputs, role, curated_role.as_ref(), request)
        })
        .collect();

    repair_squad(&mut squad, &inputs.ranked_boosters(), inputs.rules.booster_cap);
    squad
}

/// Re-run the booster cap on an existing squad against a booster ranking.
pub fn repair_squad(squad: &mut [RoleAssignment], ranked_boosters: &[String], cap: usize) -> RepairOutcome {
    enforce_booster_cap(squad, ranked_boosters, cap)
}
