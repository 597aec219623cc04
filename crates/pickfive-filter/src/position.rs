use pickfive_engine::{Combination, NumberSet};
use serde::{Deserialize, Serialize};

use crate::{hit_limit::ResolvedHitLimit, stage::BatchFilter};

/// Position-based rule: one allowed-value set per tuple slot.
///
/// A combination's value at slot `i` scores a hit when it is a member of
/// `slots[i]`; the rule's hit count is the number of slots that hit, in
/// `0..=k`. A slot with an empty allowed set can never hit — an operator
/// leaving a slot blank simply takes it out of play.
///
/// # Examples
///
/// ```
/// use pickfive_engine::Combination;
/// use pickfive_filter::{BatchFilter, HitLimit, PositionRule};
///
/// let rule = PositionRule::new(vec![
///     [1, 2].into_iter().collect(),
///     [3, 4].into_iter().collect(),
///     [5, 6].into_iter().collect(),
/// ]);
/// let limit = HitLimit::All.resolve(rule.active_entry_count());
///
/// let combos = vec![
///     Combination::new(&[1, 3, 5]).unwrap(),
///     Combination::new(&[1, 3, 4]).unwrap(),
/// ];
/// assert_eq!(rule.evaluate(&limit, &combos), vec![true, false]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRule {
    slots: Vec<NumberSet>,
}

impl PositionRule {
    #[must_use]
    pub fn new(slots: Vec<NumberSet>) -> Self {
        Self { slots }
    }

    /// The per-slot allowed-value sets, in slot order.
    #[must_use]
    pub fn slots(&self) -> &[NumberSet] {
        &self.slots
    }

    fn hits(&self, combo: &Combination) -> usize {
        self.slots
            .iter()
            .zip(combo.values())
            .filter(|&(ref slot, &value)| slot.contains(value))
            .count()
    }
}

impl BatchFilter for PositionRule {
    fn active_entry_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    fn evaluate(&self, limit: &ResolvedHitLimit, combos: &[Combination]) -> Vec<bool> {
        combos
            .iter()
            .map(|combo| limit.contains(self.hits(combo)))
            .collect()
    }
}
