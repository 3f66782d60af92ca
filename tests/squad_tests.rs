use std::collections::HashMap;

use hellpod::data::catalog::ItemCatalog;
use hellpod::data::curated::CuratedTable;
use hellpod::data::usage::UsageDataset;
use hellpod::loadout::booster::enforce_booster_cap;
use hellpod::loadout::grenade::pick_grenade_for_faction;
use hellpod::loadout::ranking::{rank_by_usage, DEFAULT_BASE_BIAS};
use hellpod::loadout::rng::Rng;
use hellpod::loadout::role_picker::pick_for_role;
use hellpod::loadout::rules::{LoadoutRules, TERMINIDS};
use hellpod::loadout::squad::{Role, RoleAssignment};
use hellpod::loadout::weights::UsageWeights;
use hellpod::loadout::whitelist::Whitelist;
use hellpod::loadout::{
    build_challenge_squad, build_finder_squad, ChallengeRequest, FinderRequest, SquadInputs,
};
use serde_json::json;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn full_catalog() -> ItemCatalog {
    ItemCatalog::from_value(json!({
        "primaries": { "all": ["AR-23 Liberator", "SG-225 Breaker", "PLAS-1 Scorcher"] },
        "sidearms": { "all": ["P-2 Peacemaker", "P-4 Senator"] },
        "explosives": {
            "grenades": ["G-6 Frag Grenade", "G-10 Incendiary Grenade"],
            "all": ["G-6 Frag Grenade", "G-10 Incendiary Grenade", "G-123 Thermite Grenade"]
        },
        "boosters": { "all": ["Vitality Enhancement", "Stamina Enhancement", "Hellpod Space Optimization"] },
        "armor": { "all": ["B-01 Tactical", "FS-05 Marksman"] },
        "stratagems": {
            "turrets": ["A/G-16 Gatling Sentry"],
            "bombardments": ["Orbital Napalm Barrage", "Eagle Airstrike"],
            "deployables": ["EXO-49 Emancipator Exosuit"],
            "backpacks": ["B-1 Supply Pack"],
            "all": ["LAS-99 Quasar Cannon", "EAT-17 Expendable Anti-Tank"]
        }
    }))
}

struct Fixture {
    catalog: ItemCatalog,
    whitelist: Whitelist,
    weights: UsageWeights,
    rules: LoadoutRules,
}

impl Fixture {
    fn new(catalog: ItemCatalog, weights: UsageWeights) -> Self {
        Self {
            whitelist: Whitelist::from_catalog(&catalog),
            catalog,
            weights,
            rules: LoadoutRules::default(),
        }
    }

    fn inputs(&self) -> SquadInputs<'_> {
        SquadInputs {
            catalog: &self.catalog,
            weights: &self.weights,
            whitelist: &self.whitelist,
            rules: &self.rules,
        }
    }
}

#[test]
fn top_weighted_primary_is_chosen() {
    let catalog = ItemCatalog::from_value(json!({ "primaries": { "all": ["P1", "P2"] } }));
    let weights: UsageWeights = [("P1", 1.0), ("P2", 0.2)].into_iter().collect();
    let fixture = Fixture::new(catalog, weights);

    assert_eq!(
        rank_by_usage(&names(&["P1", "P2"]), &fixture.weights, DEFAULT_BASE_BIAS),
        names(&["P1", "P2"])
    );
    let member = pick_for_role(&fixture.inputs(), Role::Assault, None, &FinderRequest::default());
    assert_eq!(member.primary.as_deref(), Some("P1"));
}

#[test]
fn third_duplicate_booster_moves_to_next_ranked() {
    let mut squad: Vec<RoleAssignment> = Role::ALL[..3]
        .iter()
        .map(|role| RoleAssignment {
            booster: Some("Stim".to_string()),
            ..RoleAssignment::empty(*role)
        })
        .collect();

    let outcome = enforce_booster_cap(&mut squad, &names(&["Stim", "Vitality", "Adrenal"]), 2);

    let boosters: Vec<&str> = squad.iter().filter_map(|m| m.booster.as_deref()).collect();
    assert_eq!(boosters, vec!["Stim", "Stim", "Vitality"]);
    assert_eq!(outcome.swaps.len(), 1);
    assert!(outcome.unresolved.is_empty());
}

#[test]
fn terminid_hint_overrides_weight_order() {
    let ranked = names(&["Frag Grenade", "Incendiary Grenade"]);
    let picked = pick_grenade_for_faction(&LoadoutRules::default(), TERMINIDS, &ranked, true);
    assert_eq!(picked.as_deref(), Some("Incendiary Grenade"));
}

#[test]
fn empty_usage_keeps_catalog_order() {
    let weights = UsageWeights::from_dataset(&UsageDataset::from_value(json!({})));
    assert!(weights.is_empty());

    let candidates = names(&["SG-225 Breaker", "AR-23 Liberator", "PLAS-1 Scorcher"]);
    assert_eq!(rank_by_usage(&candidates, &weights, DEFAULT_BASE_BIAS), candidates);
}

#[test]
fn missing_curated_block_falls_back_to_catalog_pools() {
    let fixture = Fixture::new(full_catalog(), UsageWeights::default());
    let curated = CuratedTable::from_value(json!({
        "Automatons (Bots)": { "Challenging": { "Sabotage Facilities": { "roles": {} } } }
    }));
    let request = FinderRequest::default();
    let block = curated.role(&request.faction, &request.difficulty, &request.objective, Role::Medic.id());
    assert!(block.is_none());

    let member = pick_for_role(&fixture.inputs(), Role::Medic, block.as_ref(), &request);
    assert_eq!(member.primary.as_deref(), Some("AR-23 Liberator"));
    assert_eq!(member.sidearm.as_deref(), Some("P-2 Peacemaker"));
    assert_eq!(member.grenade.as_deref(), Some("G-10 Incendiary Grenade"));
    assert_eq!(member.booster.as_deref(), Some("Vitality Enhancement"));
    assert_eq!(member.armor.as_deref(), Some("B-01 Tactical"));
    assert_eq!(member.stratagems.len(), 4);
}

#[test]
fn finder_squad_only_contains_catalog_names() {
    let fixture = Fixture::new(
        full_catalog(),
        [("Retired Rifle", 1.0), ("SG-225 Breaker", 0.8)].into_iter().collect(),
    );
    let curated = CuratedTable::from_value(json!({
        "Terminids (Bugs)": { "Challenging": { "Destroy Nests": { "roles": {
            "heavy": {
                "primaries": ["Retired Rifle", "PLAS-1 Scorcher"],
                "stratagems": ["Old Orbital", "Eagle Airstrike"]
            }
        } } } }
    }));

    let squad = build_finder_squad(&fixture.inputs(), &curated, &FinderRequest::default());
    assert_eq!(squad.len(), Role::ALL.len());
    for member in &squad {
        for name in member.item_names() {
            assert!(fixture.whitelist.contains(name), "'{name}' is not a catalog item");
        }
    }
    assert_eq!(squad[0].primary.as_deref(), Some("SG-225 Breaker"));
}

#[test]
fn finder_squad_respects_booster_cap() {
    let fixture = Fixture::new(
        full_catalog(),
        [("Vitality Enhancement", 1.0)].into_iter().collect(),
    );
    let squad = build_finder_squad(&fixture.inputs(), &CuratedTable::default(), &FinderRequest::default());

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for booster in squad.iter().filter_map(|m| m.booster.as_deref()) {
        *counts.entry(booster).or_default() += 1;
    }
    assert!(counts.values().all(|&count| count <= 2), "counts: {counts:?}");
}

#[test]
fn must_include_stratagems_reach_the_candidate_pool() {
    let catalog = ItemCatalog::from_value(json!({
        "stratagems": {
            "all": ["Eagle Airstrike"],
            "support_weapons": ["LAS-99 Quasar Cannon"]
        }
    }));
    let fixture = Fixture::new(catalog, UsageWeights::default());
    let squad = build_finder_squad(&fixture.inputs(), &CuratedTable::default(), &FinderRequest::default());
    assert_eq!(squad[0].stratagems, names(&["Eagle Airstrike", "LAS-99 Quasar Cannon"]));
}

#[test]
fn usage_weights_are_normalized_to_one() {
    let usage = UsageDataset::from_value(json!({
        "primaries": [
            { "name": "AR-23 Liberator", "count": 400 },
            { "name": "SG-225 Breaker", "count": "100" }
        ],
        "nested": { "deeper": [{ "item_name": "P-4 Senator", "uses": 200 }] }
    }));
    let weights = UsageWeights::from_dataset(&usage);

    assert_eq!(weights.get("AR-23 Liberator"), 1.0);
    assert_eq!(weights.get("SG-225 Breaker"), 0.25);
    assert_eq!(weights.get("P-4 Senator"), 0.5);
    assert_eq!(weights.get("Unknown"), 0.0);
    assert!(weights.iter().all(|(_, weight)| weight > 0.0 && weight <= 1.0));
}

#[test]
fn seeded_challenge_is_reproducible() {
    let fixture = Fixture::new(full_catalog(), UsageWeights::default());
    let request = ChallengeRequest {
        player_count: 3,
        enforce_faction_grenades: true,
        ..ChallengeRequest::default()
    };

    let first = build_challenge_squad(&fixture.inputs(), &request, &mut Rng::new(42)).expect("valid request");
    let second = build_challenge_squad(&fixture.inputs(), &request, &mut Rng::new(42)).expect("valid request");
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    for member in &first {
        assert!(member.grenade.as_deref().is_some_and(|g| g.contains("Incendiary")));
        assert!(member.stratagems.len() <= 4);
    }
}

#[test]
fn challenge_rejects_empty_squad() {
    let fixture = Fixture::new(full_catalog(), UsageWeights::default());
    let request = ChallengeRequest {
        player_count: 0,
        ..ChallengeRequest::default()
    };
    assert!(build_challenge_squad(&fixture.inputs(), &request, &mut Rng::new(1)).is_err());
}
