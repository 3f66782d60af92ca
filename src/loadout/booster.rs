//! Squad-wide booster cap: no booster on more than `cap` role assignments.
//!
//! Single greedy pass in squad order. The first `cap` holders of a booster keep it; each
//! later holder moves to the next booster ranked below theirs that is still under the cap,
//! or failing that to any booster under the cap. When every booster is saturated the slot
//! keeps its duplicate. Earlier slots are never revisited.

use std::collections::HashMap;

use crate::loadout::squad::RoleAssignment;

/// Summary of what the repair pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairOutcome {
    /// (slot index, old booster, new booster) per swap.
    pub swaps: Vec<(usize, String, String)>,
    /// Slots left over the cap because no alternative existed.
    pub unresolved: Vec<usize>,
}

pub fn enforce_booster_cap(squad: &mut [RoleAssignment], ranked_boosters: &[String], cap: usize) -> RepairOutcome {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut outcome = RepairOutcome::default();

    for (slot, member) in squad.iter_mut().enumerate() {
        let Some(booster) = member.booster.clone() else {
            continue;
        };
        let count = counts.entry(booster.clone()).or_insert(0);
        *count += 1;
        if *count <= cap {
            continue;
        }

        let under_cap = |name: &String, counts: &HashMap<String, usize>| {
            counts.get(name).copied().unwrap_or(0) < cap
        };
        let start = ranked_boosters
            .iter()
            .position(|name| *name == booster)
            .map_or(0, |index| index + 1);
        let replacement = ranked_boosters[start.min(ranked_boosters.len())..]
            .iter()
            .find(|name| under_cap(name, &counts))
            .or_else(|| ranked_boosters.iter().find(|name| under_cap(name, &counts)))
            .cloned();

        match replacement {
            Some(alternative) => {
                *counts.entry(alternative.clone()).or_insert(0) += 1;
                log::debug!("booster cap: slot {slot} '{booster}' -> '{alternative}'");
                member.booster = Some(alternative.clone());
                outcome.swaps.push((slot, booster, alternative));
            }
            None => {
                log::debug!("booster cap: no alternative for slot {slot} '{booster}'");
                outcome.unresolved.push(slot);
            }
        }
    }

    outcome
}
