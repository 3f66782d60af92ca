use crate::loadout::weights::UsageWeights;

/// Bias added to every candidate when no other context applies.
pub const DEFAULT_BASE_BIAS: f64 = 0.10;

/// Sort candidates by descending `weight + bias`. Equal scores keep their input order.
pub fn rank_by_usage(candidates: &[String], weights: &UsageWeights, bias: f64) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|name| (weights.get(name) + bias, name))
        .collect();

    scored.sort_by(|left, right| right.0.total_cmp(&left.0));

    scored.into_iter().map(|(_, name)| name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn heavier_items_come_first() {
        let weights: UsageWeights = [("P1", 1.0), ("P2", 0.2)].into_iter().collect();
        let ranked = rank_by_usage(&names(&["P2", "P1"]), &weights, DEFAULT_BASE_BIAS);
        assert_eq!(ranked, names(&["P1", "P2"]));
    }

    #[test]
    fn empty_weights_keep_insertion_order() {
        let ranked = rank_by_usage(&names(&["C", "A", "B"]), &UsageWeights::default(), 0.3);
        assert_eq!(ranked, names(&["C", "A", "B"]));
    }

    #[test]
    fn output_is_non_increasing_in_score() {
        let weights: UsageWeights = [("a", 0.3), ("b", 0.9), ("c", 0.0), ("d", 0.9)].into_iter().collect();
        let ranked = rank_by_usage(&names(&["a", "b", "c", "d", "e"]), &weights, 0.05);
        let scores: Vec<f64> = ranked.iter().map(|n| weights.get(n) + 0.05).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(ranked[..2], names(&["b", "d"])[..]);
    }
}
