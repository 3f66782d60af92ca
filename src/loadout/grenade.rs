use crate::loadout::rules::LoadoutRules;

/// Pick a grenade from an already ordered candidate list.
///
/// Without enforcement the first candidate wins. With enforcement the faction's hint
/// fragments are tried in priority order and the first candidate containing one
/// (case-insensitive) is chosen; no match falls back to the first candidate.
pub fn pick_grenade_for_faction(
    rules: &LoadoutRules,
    faction: &str,
    ranked: &[String],
    enforce_faction: bool,
) -> Option<String> {
    if enforce_faction {
        let hints = rules.hints_for(faction);
        if hints.is_empty() {
            log::warn!("no grenade hints for faction '{faction}'");
        }
        for hint in hints {
            let hint = hint.to_lowercase();
            if let Some(found) = ranked.iter().find(|name| name.to_lowercase().contains(&hint)) {
                return Some(found.clone());
            }
        }
    }
    ranked.first().cloned()
}
