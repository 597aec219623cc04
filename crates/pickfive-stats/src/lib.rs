//! Survivor-set statistics for the combination analyzer.
//!
//! This crate aggregates a filtered survivor set into the two reports the
//! result record carries:
//!
//! - **Frequency ranking** ([`frequency`]): how often each number appears
//!   across the survivors, ordered by descending count with ties broken by
//!   ascending number.
//! - **Prize settlement** ([`prize`]): how the survivors would have paid out
//!   against a reference winning draw, bucketed into the fixed payout tiers.
//!
//! Both are pure batch reductions: empty input produces an empty table or an
//! all-zero settlement, never an error.
//!
//! # Examples
//!
//! ```
//! use pickfive_engine::Combination;
//! use pickfive_stats::{FrequencyTable, PrizeTable};
//!
//! let survivors = vec![
//!     Combination::new(&[1, 2, 3, 7, 8]).unwrap(),
//!     Combination::new(&[1, 2, 6, 7, 8]).unwrap(),
//! ];
//!
//! let table = FrequencyTable::tally(&survivors);
//! assert_eq!(table.count_of(1), 2);
//!
//! let draw = [1, 2, 3, 4, 5].into_iter().collect();
//! let summary = PrizeTable::DEFAULT.settle(draw, &survivors);
//! assert_eq!(summary.total_prize, 350);
//! ```

pub use self::{frequency::*, prize::*};

pub mod frequency;
pub mod prize;
