//! Orchestration of one full combination analysis run.
//!
//! This crate ties the workspace together: it takes a validated
//! [`AnalysisRequest`](request::AnalysisRequest), generates the exhaustive
//! combination universe, applies the configured filter stages, and bundles
//! the survivor statistics into a single
//! [`AnalysisResult`](pipeline::AnalysisResult) record.
//!
//! # Pipeline
//!
//! ```text
//! UniverseSpec::generate()            (pickfive-engine)
//!     ↓
//! FilterStage<PositionRule>::apply()  (pickfive-filter, when enabled)
//!     ↓
//! FilterStage<CriteriaRule>::apply()  (pickfive-filter, when enabled)
//!     ↓
//! FrequencyTable::tally()             (pickfive-stats)
//! PrizeTable::settle()                (pickfive-stats, when a draw is given)
//! ```
//!
//! The stage order is fixed: the position stage always precedes the criteria
//! stage when both are enabled. A disabled stage is an identity pass-through.
//! Each `run` call owns its universe and every intermediate survivor set, so
//! concurrent runs need no coordination.
//!
//! The request is validated once, before any generation or filtering;
//! configuration errors ([`AnalysisError`]) propagate to the caller and
//! never produce a partial result. The presentation and parsing
//! collaborators sit entirely outside this crate — the core only accepts and
//! returns structured values.
//!
//! # Example
//!
//! ```
//! use pickfive_analysis::{AnalysisRequest, run};
//! use pickfive_engine::UniverseSpec;
//!
//! // No filters, no reference draw: the full universe survives.
//! let request = AnalysisRequest::new(UniverseSpec::new(6, 3));
//! let result = run(&request).unwrap();
//!
//! assert_eq!(result.survivor_count, 20);
//! assert_eq!(result.eliminated_count, 0);
//! assert!(result.prize.is_none());
//! ```

pub use self::{pipeline::*, request::*};

pub mod pipeline;
pub mod request;

use pickfive_engine::UniverseError;

/// A request that cannot be analyzed, rejected before any filtering runs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    /// Invalid universe parameters.
    #[display("invalid universe: {_0}")]
    Universe(UniverseError),
    /// A stage is enabled but its outer hit limit is missing. Absence has a
    /// meaning only at the inner level.
    #[display("{stage} filtering is enabled but no outer hit limit was supplied")]
    MissingOuterLimit { stage: StageKind },
    /// A stage's rule list and inner-limit list disagree in length.
    #[display("{stage} stage supplies {rules} rules but {limits} inner hit limits")]
    RuleCountMismatch {
        stage: StageKind,
        rules: usize,
        limits: usize,
    },
    /// A position rule's slot count does not match the universe's pick
    /// count.
    #[display("position rule {index} has {slots} slots, the universe picks {pick_count}")]
    SlotCountMismatch {
        index: usize,
        slots: usize,
        pick_count: usize,
    },
    /// A rule references a number outside the universe pool.
    #[display("{stage} rule {index} references {number}, outside the pool 1..={pool_size}")]
    RuleNumberOutOfRange {
        stage: StageKind,
        index: usize,
        number: u8,
        pool_size: u8,
    },
    /// The reference draw contains a number outside the universe pool.
    #[display("reference draw contains {number}, outside the pool 1..={pool_size}")]
    DrawNumberOutOfRange { number: u8, pool_size: u8 },
}

impl From<UniverseError> for AnalysisError {
    fn from(err: UniverseError) -> Self {
        Self::Universe(err)
    }
}

/// The two filter stages, used to label configuration errors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum StageKind {
    #[display("position")]
    Position,
    #[display("criteria")]
    Criteria,
}
