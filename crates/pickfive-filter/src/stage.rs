use pickfive_engine::Combination;
use serde::{Deserialize, Serialize};

use crate::hit_limit::{HitLimit, ResolvedHitLimit};

/// One capability: evaluate a rule and its resolved threshold over a
/// combination batch and return a pass/fail mask.
///
/// Implemented by [`PositionRule`](crate::position::PositionRule) and
/// [`CriteriaRule`](crate::criteria::CriteriaRule); the
/// [`FilterStage`] aggregator is generic over it. Results must be identical
/// to testing each combination in sequence — implementations are pure batch
/// transforms with no cross-combination state.
pub trait BatchFilter {
    /// Number of non-empty entries supplied to this rule. This is the basis
    /// an inner [`HitLimit::All`] resolves against.
    fn active_entry_count(&self) -> usize;

    /// Whether the operator left this rule entirely blank. Blank rules are
    /// ignored by the outer [`HitLimit::All`] basis.
    fn is_blank(&self) -> bool {
        self.active_entry_count() == 0
    }

    /// Evaluates every combination in the batch, returning one pass/fail
    /// entry per combination in input order.
    fn evaluate(&self, limit: &ResolvedHitLimit, combos: &[Combination]) -> Vec<bool>;
}

/// One rule in a stage, paired with its optional inner hit limit.
///
/// An absent inner limit deactivates the rule: it is skipped entirely and
/// contributes neither a pass nor a fail vote to any combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRule<R> {
    pub rule: R,
    pub inner_limit: Option<HitLimit>,
}

/// A full filtering stage: a list of voting rules under one outer hit limit.
///
/// Each active rule contributes one vote per combination it passes; a
/// combination survives the stage when its vote tally satisfies the outer
/// limit. Survivors keep their original relative order — the stage is a
/// stable filter, never a re-sort.
///
/// The outer [`HitLimit::All`] resolves against the number of non-blank
/// rules in the stage, whether or not those rules carry an inner limit; the
/// inner `All` resolves against each rule's own non-empty entries. The
/// asymmetry is deliberate: the sentinel counts rule content an operator
/// supplied, not the rules that happen to vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStage<R> {
    rules: Vec<StageRule<R>>,
    outer_limit: HitLimit,
}

impl<R> FilterStage<R> {
    #[must_use]
    pub fn new(rules: Vec<StageRule<R>>, outer_limit: HitLimit) -> Self {
        Self { rules, outer_limit }
    }

    #[must_use]
    pub fn rules(&self) -> &[StageRule<R>] {
        &self.rules
    }

    #[must_use]
    pub fn outer_limit(&self) -> &HitLimit {
        &self.outer_limit
    }
}

impl<R: BatchFilter> FilterStage<R> {
    /// The outer `All` basis: rules with any content.
    #[must_use]
    pub fn active_rule_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|stage_rule| !stage_rule.rule.is_blank())
            .count()
    }

    /// Applies the stage to a batch, returning the surviving combinations in
    /// their original relative order.
    #[must_use]
    pub fn apply(&self, combos: &[Combination]) -> Vec<Combination> {
        let mut votes = vec![0_usize; combos.len()];
        for stage_rule in &self.rules {
            let Some(inner_limit) = &stage_rule.inner_limit else {
                continue;
            };
            let resolved = inner_limit.resolve(stage_rule.rule.active_entry_count());
            let mask = stage_rule.rule.evaluate(&resolved, combos);
            for (vote, passed) in votes.iter_mut().zip(mask) {
                *vote += usize::from(passed);
            }
        }

        let outer = self.outer_limit.resolve(self.active_rule_count());
        combos
            .iter()
            .zip(votes)
            .filter(|(_, vote)| outer.contains(*vote))
            .map(|(combo, _)| combo.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pickfive_engine::UniverseSpec;

    use super::*;
    use crate::position::PositionRule;

    fn rule(slots: &[&[u8]]) -> PositionRule {
        PositionRule::new(
            slots
                .iter()
                .map(|numbers| numbers.iter().copied().collect())
                .collect(),
        )
    }

    fn low_rule() -> PositionRule {
        rule(&[&[1, 2], &[3, 4], &[5, 6]])
    }

    fn high_rule() -> PositionRule {
        rule(&[&[3, 4], &[4, 5], &[5, 6]])
    }

    #[test]
    fn test_single_rule_stage() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        let stage = FilterStage::new(
            vec![StageRule {
                rule: low_rule(),
                inner_limit: Some(HitLimit::Single(3)),
            }],
            HitLimit::Single(1),
        );
        assert_eq!(stage.apply(&universe).len(), 8);
    }

    #[test]
    fn test_vote_tally_across_rules() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        let rules = vec![
            StageRule {
                rule: low_rule(),
                inner_limit: Some(HitLimit::Single(3)),
            },
            StageRule {
                rule: high_rule(),
                inner_limit: Some(HitLimit::Single(3)),
            },
        ];

        // Requiring at least one vote unions the two rules' survivor sets:
        // 8 for the low rule, 4 for the high rule, no overlap.
        let at_least_one = FilterStage::new(rules.clone(), HitLimit::Range { lo: 1, hi: 2 });
        assert_eq!(at_least_one.apply(&universe).len(), 12);

        // Requiring both votes intersects them; the low rule needs slot 0 in
        // {1, 2} while the high rule needs it in {3, 4}, so nothing remains.
        let both = FilterStage::new(rules, HitLimit::Single(2));
        assert!(both.apply(&universe).is_empty());
    }

    #[test]
    fn test_absent_inner_limit_skips_the_rule() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        let stage = FilterStage::new(
            vec![
                StageRule {
                    rule: low_rule(),
                    inner_limit: Some(HitLimit::Single(3)),
                },
                StageRule {
                    rule: high_rule(),
                    inner_limit: None,
                },
            ],
            HitLimit::Single(1),
        );
        // The skipped rule casts no votes, so the tally matches the
        // single-rule stage exactly.
        assert_eq!(stage.apply(&universe).len(), 8);
    }

    #[test]
    fn test_outer_all_counts_non_blank_rules() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        let stage = FilterStage::new(
            vec![
                StageRule {
                    rule: low_rule(),
                    inner_limit: Some(HitLimit::Single(3)),
                },
                StageRule {
                    rule: rule(&[&[], &[], &[]]),
                    inner_limit: Some(HitLimit::Single(0)),
                },
            ],
            HitLimit::All,
        );
        // One blank rule, one active rule: the outer "all" basis is 1. The
        // blank rule still votes (its inner limit of 0 hits everywhere), so
        // tallies reach 2 for the low rule's survivors and "all" = 1 keeps
        // only combinations with exactly one vote.
        assert_eq!(stage.active_rule_count(), 1);
        let survivors = stage.apply(&universe);
        assert_eq!(survivors.len(), universe.len() - 8);
    }

    #[test]
    fn test_outer_all_basis_ignores_missing_inner_limits() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        // A non-blank rule with no inner limit never votes but still raises
        // the outer "all" basis to 2, so no combination can satisfy "all".
        let stage = FilterStage::new(
            vec![
                StageRule {
                    rule: low_rule(),
                    inner_limit: Some(HitLimit::Single(3)),
                },
                StageRule {
                    rule: high_rule(),
                    inner_limit: None,
                },
            ],
            HitLimit::All,
        );
        assert_eq!(stage.active_rule_count(), 2);
        assert!(stage.apply(&universe).is_empty());
    }

    #[test]
    fn test_survivors_keep_original_order() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        let stage = FilterStage::new(
            vec![StageRule {
                rule: low_rule(),
                inner_limit: Some(HitLimit::Single(3)),
            }],
            HitLimit::Single(1),
        );
        let survivors = stage.apply(&universe);
        for window in survivors.windows(2) {
            assert!(window[0] < window[1], "survivors must stay in universe order");
        }
    }

    #[test]
    fn test_narrowing_outer_limit_never_grows_survivors() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        let rules = vec![
            StageRule {
                rule: low_rule(),
                inner_limit: Some(HitLimit::Single(3)),
            },
            StageRule {
                rule: high_rule(),
                inner_limit: Some(HitLimit::Range { lo: 2, hi: 3 }),
            },
        ];
        let wide = FilterStage::new(rules.clone(), HitLimit::Range { lo: 1, hi: 2 });
        let narrow = FilterStage::new(rules, HitLimit::Single(2));
        assert!(narrow.apply(&universe).len() <= wide.apply(&universe).len());
    }
}
