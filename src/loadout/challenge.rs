//! Challenge mode: uniform random loadouts per player, no usage weighting.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_FACTION;
use crate::error::{HellpodError, Result};
use crate::loadout::booster::enforce_booster_cap;
use crate::loadout::grenade::pick_grenade_for_faction;
use crate::loadout::ranking::rank_by_usage;
use crate::loadout::rng::RandomSource;
use crate::loadout::role_picker::STRATAGEMS_PER_ROLE;
use crate::loadout::squad::{role_for_slot, RoleAssignment, Squad};
use crate::loadout::SquadInputs;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 6;
pub const DEFAULT_PLAYERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub faction: String,
    #[serde(default)]
    pub enforce_faction_grenades: bool,
    #[serde(default = "default_players")]
    pub player_count: usize,
    /// Run the booster cap pass after drawing.
    #[serde(default)]
    pub enforce_booster_cap: bool,
}

fn default_players() -> usize {
    DEFAULT_PLAYERS
}

impl Default for ChallengeRequest {
    fn default() -> Self {
        Self {
            faction: DEFAULT_FACTION.to_string(),
            enforce_faction_grenades: false,
            player_count: DEFAULT_PLAYERS,
            enforce_booster_cap: false,
        }
    }
}

/// Whitelisted pools challenge mode draws from.
#[derive(Debug, Clone, Default)]
struct ChallengePools {
    primaries: Vec<String>,
    sidearms: Vec<String>,
    grenades: Vec<String>,
    boosters: Vec<String>,
    armor: Vec<String>,
    stratagems: Vec<String>,
}

impl ChallengePools {
    fn gather(inputs: &SquadInputs<'_>) -> Self {
        let catalog = inputs.catalog;
        let whitelist = inputs.whitelist;
        let pool = |names: Vec<String>, category: &str| whitelist.sanitize(names, &format!("challenge {category}"));
        Self {
            primaries: pool(catalog.primaries(), "primaries"),
            sidearms: pool(catalog.sidearms(), "sidearms"),
            grenades: pool(catalog.all(crate::data::catalog::EXPLOSIVES), "grenades"),
            boosters: pool(catalog.boosters(), "boosters"),
            armor: pool(catalog.armor(), "armor"),
            stratagems: pool(catalog.stratagem_pool(), "stratagems"),
        }
    }
}

pub fn build_challenge_squad<R: RandomSource>(
    inputs: &SquadInputs<'_>,
    request: &ChallengeRequest,
    rng: &mut R,
) -> Result<Squad> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&request.player_count) {
        return Err(HellpodError::InvalidRequest(format!(
            "player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
            request.player_count
        )));
    }

    let pools = ChallengePools::gather(inputs);
    let mut squad: Squad = (0..request.player_count)
        .map(|slot| draw_assignment(inputs, &pools, request, slot, rng))
        .collect();

    if request.enforce_booster_cap {
        let ranked = rank_by_usage(&pools.boosters, inputs.weights, inputs.rules.base_bias);
        enforce_booster_cap(&mut squad, &ranked, inputs.rules.booster_cap);
    }
    Ok(squad)
}

fn draw_assignment<R: RandomSource>(
    inputs: &SquadInputs<'_>,
    pools: &ChallengePools,
    request: &ChallengeRequest,
    slot: usize,
    rng: &mut R,
) -> RoleAssignment {
    let primary = rng.pick(&pools.primaries).cloned();
    let sidearm = rng.pick(&pools.sidearms).cloned();

    // A shuffled pool keeps the grenade uniform while still honouring faction hints.
    let mut grenades = pools.grenades.clone();
    rng.shuffle(&mut grenades);
    let grenade = pick_grenade_for_faction(
        inputs.rules,
        &request.faction,
        &grenades,
        request.enforce_faction_grenades,
    );

    // Collisions are kept out rather than redrawn, so fewer than four can come back.
    let stratagems: IndexSet<String> = (0..STRATAGEMS_PER_ROLE)
        .filter_map(|_| rng.pick(&pools.stratagems).cloned())
        .collect();

    RoleAssignment {
        role: role_for_slot(slot),
        primary,
        sidearm,
        grenade,
        booster: rng.pick(&pools.boosters).cloned(),
        armor: rng.pick(&pools.armor).cloned(),
        stratagems: stratagems.into_iter().collect(),
    }
}
