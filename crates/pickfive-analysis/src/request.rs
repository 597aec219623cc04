use pickfive_engine::{NumberSet, UniverseSpec};
use pickfive_filter::{CriteriaRule, HitLimit, PositionRule};
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, StageKind};

/// Full configuration for one analysis run.
///
/// The parsing collaborator builds a request from operator input and hands
/// it to [`run`](crate::pipeline::run); every field is already structured —
/// the core never sees raw text. Rule lists pair up with their inner-limit
/// lists by index, and a stage's configuration is only consulted when the
/// stage is enabled.
///
/// # Examples
///
/// ```
/// use pickfive_analysis::AnalysisRequest;
/// use pickfive_engine::UniverseSpec;
/// use pickfive_filter::{HitLimit, PositionRule};
///
/// let mut request = AnalysisRequest::new(UniverseSpec::new(6, 3));
/// request.use_position_filter = true;
/// request.position_outer_limit = Some(HitLimit::Single(1));
/// request.position_rules = vec![PositionRule::new(vec![
///     [1, 2].into_iter().collect(),
///     [3, 4].into_iter().collect(),
///     [5, 6].into_iter().collect(),
/// ])];
/// request.position_inner_limits = vec![Some(HitLimit::All)];
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The (N, k) universe to analyze.
    pub universe: UniverseSpec,
    /// Whether the position stage runs.
    pub use_position_filter: bool,
    /// Whether the criteria stage runs.
    pub use_criteria_filter: bool,
    /// Outer vote threshold of the position stage; required when enabled.
    pub position_outer_limit: Option<HitLimit>,
    /// Outer vote threshold of the criteria stage; required when enabled.
    pub criteria_outer_limit: Option<HitLimit>,
    /// Inner limits, one per position rule; `None` deactivates its rule.
    pub position_inner_limits: Vec<Option<HitLimit>>,
    /// Inner limits, one per criteria rule; `None` deactivates its rule.
    pub criteria_inner_limits: Vec<Option<HitLimit>>,
    /// The position stage's rules.
    pub position_rules: Vec<PositionRule>,
    /// The criteria stage's rules.
    pub criteria_rules: Vec<CriteriaRule>,
    /// Reference winning draw; empty skips prize settlement.
    pub reference_draw: NumberSet,
}

impl AnalysisRequest {
    /// A request with both stages disabled and no reference draw.
    #[must_use]
    pub fn new(universe: UniverseSpec) -> Self {
        Self {
            universe,
            use_position_filter: false,
            use_criteria_filter: false,
            position_outer_limit: None,
            criteria_outer_limit: None,
            position_inner_limits: Vec::new(),
            criteria_inner_limits: Vec::new(),
            position_rules: Vec::new(),
            criteria_rules: Vec::new(),
            reference_draw: NumberSet::EMPTY,
        }
    }

    /// Checks the whole request without running anything.
    ///
    /// Validation is fail-fast and covers the universe parameters, the
    /// enabled stages' shape (outer limit present, rule and inner-limit
    /// lists of equal length, position slot counts matching the pick
    /// count), and every referenced number being inside the pool. Disabled
    /// stages are not consulted.
    ///
    /// # Errors
    ///
    /// Returns the first [`AnalysisError`] encountered.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.universe.validate()?;
        let pool_size = self.universe.pool_size;

        if self.use_position_filter {
            if self.position_outer_limit.is_none() {
                return Err(AnalysisError::MissingOuterLimit {
                    stage: StageKind::Position,
                });
            }
            if self.position_rules.len() != self.position_inner_limits.len() {
                return Err(AnalysisError::RuleCountMismatch {
                    stage: StageKind::Position,
                    rules: self.position_rules.len(),
                    limits: self.position_inner_limits.len(),
                });
            }
            for (index, rule) in self.position_rules.iter().enumerate() {
                if rule.slots().len() != self.universe.pick_count {
                    return Err(AnalysisError::SlotCountMismatch {
                        index,
                        slots: rule.slots().len(),
                        pick_count: self.universe.pick_count,
                    });
                }
                let numbers = rule.slots().iter().flat_map(|slot| slot.iter());
                check_pool(StageKind::Position, index, numbers, pool_size)?;
            }
        }

        if self.use_criteria_filter {
            if self.criteria_outer_limit.is_none() {
                return Err(AnalysisError::MissingOuterLimit {
                    stage: StageKind::Criteria,
                });
            }
            if self.criteria_rules.len() != self.criteria_inner_limits.len() {
                return Err(AnalysisError::RuleCountMismatch {
                    stage: StageKind::Criteria,
                    rules: self.criteria_rules.len(),
                    limits: self.criteria_inner_limits.len(),
                });
            }
            for (index, rule) in self.criteria_rules.iter().enumerate() {
                let numbers = rule.entries().iter().flat_map(|entry| entry.pool.iter());
                check_pool(StageKind::Criteria, index, numbers, pool_size)?;
            }
        }

        if let Some(number) = self.reference_draw.iter().find(|&n| n > pool_size) {
            return Err(AnalysisError::DrawNumberOutOfRange { number, pool_size });
        }

        Ok(())
    }
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self::new(UniverseSpec::DEFAULT)
    }
}

fn check_pool(
    stage: StageKind,
    index: usize,
    numbers: impl Iterator<Item = u8>,
    pool_size: u8,
) -> Result<(), AnalysisError> {
    for number in numbers {
        if number > pool_size {
            return Err(AnalysisError::RuleNumberOutOfRange {
                stage,
                index,
                number,
                pool_size,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pickfive_engine::UniverseError;
    use pickfive_filter::{CountRange, CriteriaEntry};

    use super::*;

    fn position_request() -> AnalysisRequest {
        let mut request = AnalysisRequest::new(UniverseSpec::new(6, 3));
        request.use_position_filter = true;
        request.position_outer_limit = Some(HitLimit::Single(1));
        request.position_rules = vec![PositionRule::new(vec![
            [1, 2].into_iter().collect(),
            [3, 4].into_iter().collect(),
            [5, 6].into_iter().collect(),
        ])];
        request.position_inner_limits = vec![Some(HitLimit::Single(3))];
        request
    }

    #[test]
    fn test_default_request_is_valid() {
        assert!(AnalysisRequest::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_universe_is_rejected_first() {
        let mut request = position_request();
        request.universe = UniverseSpec::new(2, 3);
        assert_eq!(
            request.validate(),
            Err(AnalysisError::Universe(UniverseError::PickExceedsPool {
                pick_count: 3,
                pool_size: 2
            }))
        );
    }

    #[test]
    fn test_enabled_stage_requires_outer_limit() {
        let mut request = position_request();
        request.position_outer_limit = None;
        assert_eq!(
            request.validate(),
            Err(AnalysisError::MissingOuterLimit {
                stage: StageKind::Position
            })
        );
    }

    #[test]
    fn test_rule_and_limit_lists_must_pair_up() {
        let mut request = position_request();
        request.position_inner_limits.push(None);
        assert_eq!(
            request.validate(),
            Err(AnalysisError::RuleCountMismatch {
                stage: StageKind::Position,
                rules: 1,
                limits: 2
            })
        );
    }

    #[test]
    fn test_position_rule_must_cover_every_slot() {
        let mut request = position_request();
        request.position_rules = vec![PositionRule::new(vec![[1, 2].into_iter().collect()])];
        assert_eq!(
            request.validate(),
            Err(AnalysisError::SlotCountMismatch {
                index: 0,
                slots: 1,
                pick_count: 3
            })
        );
    }

    #[test]
    fn test_rule_numbers_must_stay_in_pool() {
        let mut request = position_request();
        request.position_rules = vec![PositionRule::new(vec![
            [1, 2].into_iter().collect(),
            [3, 7].into_iter().collect(),
            [5, 6].into_iter().collect(),
        ])];
        assert_eq!(
            request.validate(),
            Err(AnalysisError::RuleNumberOutOfRange {
                stage: StageKind::Position,
                index: 0,
                number: 7,
                pool_size: 6
            })
        );
    }

    #[test]
    fn test_criteria_pool_numbers_must_stay_in_pool() {
        let mut request = AnalysisRequest::new(UniverseSpec::new(6, 3));
        request.use_criteria_filter = true;
        request.criteria_outer_limit = Some(HitLimit::Single(1));
        request.criteria_rules = vec![CriteriaRule::new(vec![CriteriaEntry::new(
            CountRange::new(1, 3),
            [5, 6, 9].into_iter().collect(),
        )])];
        request.criteria_inner_limits = vec![Some(HitLimit::Single(1))];
        assert_eq!(
            request.validate(),
            Err(AnalysisError::RuleNumberOutOfRange {
                stage: StageKind::Criteria,
                index: 0,
                number: 9,
                pool_size: 6
            })
        );
    }

    #[test]
    fn test_reference_draw_must_stay_in_pool() {
        let mut request = AnalysisRequest::new(UniverseSpec::new(6, 3));
        request.reference_draw = [1, 2, 8].into_iter().collect();
        assert_eq!(
            request.validate(),
            Err(AnalysisError::DrawNumberOutOfRange {
                number: 8,
                pool_size: 6
            })
        );
    }

    #[test]
    fn test_disabled_stage_is_not_consulted() {
        let mut request = AnalysisRequest::new(UniverseSpec::new(6, 3));
        // Malformed position config, but the stage is disabled.
        request.position_rules = vec![PositionRule::new(vec![[9].into_iter().collect()])];
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let request = position_request();
        let json = serde_json::to_string(&request).unwrap();
        let back: AnalysisRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
