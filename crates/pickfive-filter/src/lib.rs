//! Filter evaluation for combination batches.
//!
//! This crate implements the two-level filtering scheme at the heart of the
//! analyzer:
//!
//! 1. **Inner level** — a single rule tests every combination in a batch and
//!    produces a pass/fail mask. Two rule kinds exist:
//!    [`PositionRule`](position::PositionRule) (per-slot allowed-value sets)
//!    and [`CriteriaRule`](criteria::CriteriaRule) (pool-overlap count
//!    ranges). Both express the same capability through the
//!    [`BatchFilter`](stage::BatchFilter) trait.
//!
//! 2. **Outer level** — a [`FilterStage`](stage::FilterStage) runs a list of
//!    rules, counts each rule's pass as one vote per combination, and keeps
//!    the combinations whose vote tally satisfies the stage's outer
//!    threshold. This lets an operator define many sub-rules and require,
//!    say, "at least 2 of my 4 rules must individually pass".
//!
//! Thresholds at both levels are [`HitLimit`](hit_limit::HitLimit) values: a
//! single count, an explicit count list, an inclusive count range, or the
//! "all" sentinel. A limit is resolved exactly once into a concrete count set
//! before any combination is tested; evaluation never branches on the
//! threshold shape.
//!
//! # Example
//!
//! ```
//! use pickfive_engine::UniverseSpec;
//! use pickfive_filter::{FilterStage, HitLimit, PositionRule, StageRule};
//!
//! // 3-of-6 universe; require every position to hit its allowed set.
//! let universe = UniverseSpec::new(6, 3).generate().unwrap();
//! let rule = PositionRule::new(vec![
//!     [1, 2].into_iter().collect(),
//!     [3, 4].into_iter().collect(),
//!     [5, 6].into_iter().collect(),
//! ]);
//! let stage = FilterStage::new(
//!     vec![StageRule {
//!         rule,
//!         inner_limit: Some(HitLimit::Single(3)),
//!     }],
//!     HitLimit::Single(1),
//! );
//!
//! let survivors = stage.apply(&universe);
//! assert_eq!(survivors.len(), 8);
//! ```

pub use self::{criteria::*, hit_limit::*, position::*, stage::*};

pub mod criteria;
pub mod hit_limit;
pub mod position;
pub mod stage;
