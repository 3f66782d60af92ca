//! Curated-flow picks for a single role: blend curated suggestions with the full catalog,
//! rank by usage plus synergy nudges, then take the top of each category.

use indexmap::IndexSet;

use crate::data::curated::CuratedRole;
use crate::loadout::grenade::pick_grenade_for_faction;
use crate::loadout::ranking::rank_by_usage;
use crate::loadout::rules::LoadoutRules;
use crate::loadout::squad::{Role, RoleAssignment};
use crate::loadout::whitelist::Whitelist;
use crate::loadout::{FinderRequest, SquadInputs};

/// Stratagems picked per role.
pub const STRATAGEMS_PER_ROLE: usize = 4;

/// Candidate pools for one role, whitelisted and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCandidates {
    pub primaries: Vec<String>,
    pub sidearms: Vec<String>,
    pub grenades: Vec<String>,
    pub stratagems: Vec<String>,
    pub boosters: Vec<String>,
    pub armor: Vec<String>,
}

impl RoleCandidates {
    /// Curated suggestions first, then the catalog pool for each category.
    pub fn gather(inputs: &SquadInputs<'_>, role: Role, curated: Option<&CuratedRole>) -> Self {
        let empty = CuratedRole::default();
        let curated = curated.unwrap_or(&empty);
        let catalog = inputs.catalog;
        let whitelist = inputs.whitelist;
        let merge = |suggested: &[String], pool: Vec<String>, category: &str| {
            let context = format!("{} {category}", role.id());
            let merged = whitelist.sanitize(suggested.iter().cloned().chain(pool), &context);
            if merged.is_empty() {
                log::debug!("no {category} candidates for role {}", role.id());
            }
            merged
        };

        let stratagems = merge(&curated.stratagems, catalog.stratagem_pool(), "stratagems");
        Self {
            primaries: merge(&curated.primaries, catalog.primaries(), "primaries"),
            sidearms: merge(&curated.sidearms, catalog.sidearms(), "sidearms"),
            grenades: merge(&curated.grenades, catalog.grenade_pool(), "grenades"),
            stratagems: ensure_must_include_stratagems(stratagems, whitelist, inputs.rules),
            boosters: merge(&curated.boosters, catalog.boosters(), "boosters"),
            armor: merge(&curated.armor, catalog.armor(), "armor"),
        }
    }
}

/// Append a loose whitelist match for every must-include stratagem the list lacks.
///
/// Loose match: the required name is lower-cased and stripped of the configured suffix
/// fragments, and any candidate containing the result counts as present.
pub fn ensure_must_include_stratagems(
    stratagems: Vec<String>,
    whitelist: &Whitelist,
    rules: &LoadoutRules,
) -> Vec<String> {
    let mut out: IndexSet<String> = stratagems.into_iter().collect();
    for required in &rules.must_include_stratagems {
        let needle = rules.loose_key(required);
        let present = out.iter().any(|name| name.to_lowercase().contains(&needle));
        if present {
            continue;
        }
        match whitelist.iter().find(|name| name.to_lowercase().contains(&needle)) {
            Some(found) => {
                out.insert(found.to_string());
            }
            None => log::debug!("must-include stratagem '{required}' has no catalog match"),
        }
    }
    out.into_iter().collect()
}

pub fn pick_for_role(
    inputs: &SquadInputs<'_>,
    role: Role,
    curated: Option<&CuratedRole>,
    request: &FinderRequest,
) -> RoleAssignment {
    let candidates = RoleCandidates::gather(inputs, role, curated);
    let weights = inputs.weights;
    let base = inputs.rules.base_bias;
    let biases = request.synergy.biases();

    let primaries = rank_by_usage(&candidates.primaries, weights, base + biases.role_bias(role));
    let sidearms = rank_by_usage(&candidates.sidearms, weights, base);
    let stratagems = rank_by_usage(&candidates.stratagems, weights, base + biases.stratagem_bias());
    let boosters = rank_by_usage(&candidates.boosters, weights, base + biases.booster_bias());
    let armor = rank_by_usage(&candidates.armor, weights, base);
    let grenades = rank_by_usage(&candidates.grenades, weights, base + biases.grenade_bias());

    RoleAssignment {
        role,
        primary: primaries.into_iter().next(),
        sidearm: sidearms.into_iter().next(),
        grenade: pick_grenade_for_faction(
            inputs.rules,
            &request.faction,
            &grenades,
            request.enforce_faction_grenades,
        ),
        booster: boosters.into_iter().next(),
        armor: armor.into_iter().next(),
        stratagems: stratagems.into_iter().take(STRATAGEMS_PER_ROLE).collect(),
    }
}
