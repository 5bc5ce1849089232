// Greedy-per-seed selection
// Builds one greedy package per candidate item and keeps the most valuable one

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{Amount, Combination, Item, Problem, Selection, Selector};

/// Deterministic packing heuristic.
///
/// Every item lighter than the capacity seeds one combination, which is then
/// filled greedily in cost-descending order. Combinations are grouped by total
/// cost (the lighter one wins an equal cost) and the costliest group is
/// returned. This is not an exhaustive knapsack search: the results are
/// defined by this exact procedure, including where it misses the optimum.
pub struct GreedySelector;

impl GreedySelector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for GreedySelector {
    fn select(&self, problem: &Problem) -> Selection {
        let Some(capacity) = problem.capacity_amount() else {
            return Selection::Nothing;
        };

        // Items at or above the capacity can never be packed
        let mut candidates: Vec<Item> = problem
            .items
            .iter()
            .filter(|item| item.weight < capacity)
            .copied()
            .collect();

        if candidates.is_empty() {
            return Selection::Nothing;
        }

        // Stable, so equal costs keep their line order
        candidates.sort_by(|a, b| b.cost.cmp(&a.cost));

        let mut best_by_cost: BTreeMap<Amount, Combination> = BTreeMap::new();
        for seed in &candidates {
            let combination = fill_greedily(*seed, &candidates, capacity);
            trace!(
                seed = seed.index,
                cost = %combination.total_cost(),
                weight = %combination.total_weight(),
                "seeded combination"
            );

            match best_by_cost.entry(combination.total_cost()) {
                Entry::Vacant(entry) => {
                    entry.insert(combination);
                }
                Entry::Occupied(mut entry) => {
                    if entry.get().total_weight() > combination.total_weight() {
                        entry.insert(combination);
                    }
                }
            }
        }

        best_by_cost
            .pop_last()
            .map(|(_, combination)| combination.into_selection())
            .unwrap_or(Selection::Nothing)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

/// Start from `seed` and add every other candidate that still fits, in order
fn fill_greedily(seed: Item, candidates: &[Item], capacity: Amount) -> Combination {
    let mut combination = Combination::seeded(seed);

    for item in candidates {
        // Identity is the item index, so a repeated index is never added
        if item.index == seed.index {
            continue;
        }
        if combination.fits(item, capacity) {
            combination.push(*item);
        }
    }

    combination
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LineParser;

    fn select(line: &str) -> String {
        let problem = LineParser::default().parse(line).unwrap();
        GreedySelector::new().select(&problem).to_string()
    }

    #[test]
    fn test_reference_lines() {
        assert_eq!(
            select("81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)"),
            "4"
        );
        assert_eq!(select("8 : (1,15.3,€34)"), "-");
        assert_eq!(
            select("75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)"),
            "2,7"
        );
        assert_eq!(
            select("56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)"),
            "9,8"
        );
    }

    #[test]
    fn test_equal_cost_prefers_lighter_combination() {
        assert_eq!(
            select("81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48) (7,70.30,€76)"),
            "7"
        );
    }

    #[test]
    fn test_equal_cost_and_weight_keeps_first_seed() {
        // Every seed reaches cost 7 at weight 7: seed 1 packs {1,3}, seed 2
        // packs {2,3}, seed 4 packs {4,1}. Only the first one survives.
        assert_eq!(
            select("7 : (1,5.00,€5) (2,5.00,€5) (3,2.00,€2) (4,2.00,€2)"),
            "3,1"
        );
    }

    #[test]
    fn test_items_at_capacity_are_dropped() {
        assert_eq!(select("10 : (1,10.00,€50) (2,12.5,€60)"), "-");
        assert_eq!(select("100 : (1,100.00,€100) (2,99.99,€100)"), "2");
    }

    #[test]
    fn test_zero_capacity_selects_nothing() {
        assert_eq!(select("0 : (1,0.5,€10)"), "-");
        assert_eq!(select("0 : (1,0.0,€10)"), "-");
    }

    #[test]
    fn test_negative_capacity_selects_nothing() {
        assert_eq!(select("-5 : (1,15.3,€34)"), "-");
        assert_eq!(select("-5 : (1,0.0,€34)"), "-");
    }

    #[test]
    fn test_equal_weights_keep_cost_order() {
        assert_eq!(select("20 : (1,5.00,$10) (2,5.00,$10) (3,5.00,$10)"), "1,2,3");
    }

    #[test]
    fn test_greedy_fill_is_not_exhaustive() {
        // Items 2, 3 and 4 would reach cost 10, but every seed fills up with
        // the two costliest items first and stops at cost 9
        assert_eq!(
            select("10 : (1,5.00,€5) (2,4.00,€4) (3,3.00,€3) (4,3.00,€3)"),
            "2,1"
        );
        assert_eq!(select("10 : (1,6.00,€6) (2,5.00,€5) (3,5.00,€4) (4,4.00,€3)"), "4,1");
    }

    #[test]
    fn test_repeated_index_is_skipped_for_its_seed() {
        // Both items share index 1, so neither seed can add the other
        assert_eq!(select("10 : (1,2.00,€5) (1,3.00,€4)"), "1");
    }

    #[test]
    fn test_is_deterministic() {
        let line = "75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)";
        let first = select(line);
        for _ in 0..5 {
            assert_eq!(select(line), first);
        }
    }
}
