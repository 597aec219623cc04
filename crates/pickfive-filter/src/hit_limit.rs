use serde::{Deserialize, Serialize};

/// Acceptable hit counts for one filter test (the "second limit").
///
/// A hit limit exists at two levels: each rule carries an *inner* limit its
/// hit count is tested against, and each stage carries an *outer* limit for
/// the vote tally across rules. Absence is modeled as `Option<HitLimit>`;
/// `None` at the inner level means the rule is inactive and contributes no
/// vote — which is not the same as `Single(0)`, an active limit requiring
/// zero hits.
///
/// The collaborating parsing layer maps textual shapes onto these variants
/// (a lone integer, a comma list, a `lo-hi` range, the literal "all"); the
/// core only ever sees structured values.
///
/// # Examples
///
/// ```
/// use pickfive_filter::HitLimit;
///
/// let limit = HitLimit::Range { lo: 2, hi: 4 };
/// let resolved = limit.resolve(0);
/// assert!(!resolved.contains(1));
/// assert!(resolved.contains(3));
///
/// // `All` stands for the basis count supplied at resolution time.
/// assert!(HitLimit::All.resolve(5).contains(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitLimit {
    /// Exactly this count.
    Single(usize),
    /// Any of the listed counts.
    List(Vec<usize>),
    /// Any count in `lo..=hi`. An inverted range (`lo > hi`) resolves to the
    /// empty count set and passes nothing.
    Range { lo: usize, hi: usize },
    /// Every non-empty entry supplied to the test must hit. Stands for the
    /// count of active entries, supplied as the basis at resolution time:
    /// a rule's own non-empty entries for an inner limit, the stage's
    /// non-blank rules for an outer limit.
    All,
}

impl HitLimit {
    /// Resolves the limit into a concrete count set.
    ///
    /// `all_basis` is the count the [`HitLimit::All`] sentinel stands for;
    /// the other variants ignore it. Resolution happens once per filter run,
    /// before any combination is tested.
    #[must_use]
    pub fn resolve(&self, all_basis: usize) -> ResolvedHitLimit {
        let mut counts = match self {
            Self::Single(count) => vec![*count],
            Self::List(counts) => counts.clone(),
            Self::Range { lo, hi } => (*lo..=*hi).collect(),
            Self::All => vec![all_basis],
        };
        counts.sort_unstable();
        counts.dedup();
        ResolvedHitLimit { counts }
    }
}

/// A [`HitLimit`] resolved into a sorted, deduplicated count set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHitLimit {
    counts: Vec<usize>,
}

impl ResolvedHitLimit {
    /// Checks whether `count` satisfies the limit.
    #[inline]
    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        self.counts.binary_search(&count).is_ok()
    }

    /// True when no count can satisfy the limit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The acceptable counts in ascending order.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_resolves_to_one_count() {
        let resolved = HitLimit::Single(3).resolve(99);
        assert_eq!(resolved.counts(), &[3]);
        assert!(resolved.contains(3));
        assert!(!resolved.contains(2));
    }

    #[test]
    fn test_list_is_sorted_and_deduplicated() {
        let resolved = HitLimit::List(vec![4, 1, 4, 2]).resolve(99);
        assert_eq!(resolved.counts(), &[1, 2, 4]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let resolved = HitLimit::Range { lo: 1, hi: 3 }.resolve(99);
        assert_eq!(resolved.counts(), &[1, 2, 3]);
    }

    #[test]
    fn test_inverted_range_passes_nothing() {
        let resolved = HitLimit::Range { lo: 3, hi: 1 }.resolve(99);
        assert!(resolved.is_empty());
        assert!(!resolved.contains(2));
    }

    #[test]
    fn test_all_takes_the_basis() {
        let resolved = HitLimit::All.resolve(4);
        assert_eq!(resolved.counts(), &[4]);
    }

    #[test]
    fn test_zero_is_an_active_count() {
        // A limit of 0 is a real requirement, unlike an absent limit.
        let resolved = HitLimit::Single(0).resolve(99);
        assert!(resolved.contains(0));
        assert!(!resolved.contains(1));
    }

    #[test]
    fn test_serde_round_trip() {
        let limits = vec![
            HitLimit::Single(2),
            HitLimit::List(vec![1, 3]),
            HitLimit::Range { lo: 0, hi: 2 },
            HitLimit::All,
        ];
        let json = serde_json::to_string(&limits).unwrap();
        let back: Vec<HitLimit> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, limits);
    }
}
