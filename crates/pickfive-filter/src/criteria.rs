use pickfive_engine::{Combination, NumberSet};
use serde::{Deserialize, Serialize};

use crate::{hit_limit::ResolvedHitLimit, stage::BatchFilter};

/// Inclusive range of pool-overlap counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub lo: usize,
    pub hi: usize,
}

impl CountRange {
    #[must_use]
    pub const fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, count: usize) -> bool {
        self.lo <= count && count <= self.hi
    }
}

/// One criteria entry: a number pool and the overlap counts that satisfy it.
///
/// The entry fires for a combination when the number of the combination's
/// values inside `pool` lies in `range`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaEntry {
    pub range: CountRange,
    pub pool: NumberSet,
}

impl CriteriaEntry {
    #[must_use]
    pub const fn new(range: CountRange, pool: NumberSet) -> Self {
        Self { range, pool }
    }
}

/// Criteria-based rule: a list of (count range, pool) entries.
///
/// A rule's hit count for a combination is the number of entries that fire,
/// in `0..=entries.len()`. An entry with an empty pool yields overlap 0 for
/// every combination and fires only if its range contains 0; it is a
/// degenerate but active entry, unlike a blank rule with no entries at all.
///
/// # Examples
///
/// ```
/// use pickfive_engine::Combination;
/// use pickfive_filter::{BatchFilter, CountRange, CriteriaEntry, CriteriaRule, HitLimit};
///
/// // Fires when 1 to 3 of the values fall in {1, 2, 3}.
/// let rule = CriteriaRule::new(vec![CriteriaEntry::new(
///     CountRange::new(1, 3),
///     [1, 2, 3].into_iter().collect(),
/// )]);
/// let limit = HitLimit::Single(1).resolve(0);
///
/// let combos = vec![
///     Combination::new(&[1, 4, 5]).unwrap(),
///     Combination::new(&[4, 5, 6]).unwrap(),
/// ];
/// assert_eq!(rule.evaluate(&limit, &combos), vec![true, false]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaRule {
    entries: Vec<CriteriaEntry>,
}

impl CriteriaRule {
    #[must_use]
    pub fn new(entries: Vec<CriteriaEntry>) -> Self {
        Self { entries }
    }

    /// The entries in evaluation order.
    #[must_use]
    pub fn entries(&self) -> &[CriteriaEntry] {
        &self.entries
    }

    fn hits(&self, combo_set: NumberSet) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.range.contains(entry.pool.overlap(combo_set)))
            .count()
    }
}

impl BatchFilter for CriteriaRule {
    fn active_entry_count(&self) -> usize {
        self.entries.len()
    }

    fn evaluate(&self, limit: &ResolvedHitLimit, combos: &[Combination]) -> Vec<bool> {
        combos
            .iter()
            .map(|combo| limit.contains(self.hits(combo.as_number_set())))
            .collect()
    }
}
