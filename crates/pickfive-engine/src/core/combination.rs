use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::number_set::{MAX_POOL_SIZE, NumberSet};

/// Largest supported pick count (values per combination).
pub const MAX_PICK_COUNT: usize = 10;

/// One combination drawn from the universe: an ascending tuple of distinct
/// numbers in `1..=MAX_POOL_SIZE`.
///
/// Combinations are immutable once built. The universe generator produces
/// them already ordered; collaborator-supplied tuples go through the checked
/// [`Combination::new`] constructor, which enforces the ascending-distinct
/// invariant.
///
/// # Serialization
///
/// Serializes as a plain number sequence (e.g. `[1, 5, 12, 23, 39]`); the
/// invariant is re-checked on deserialization.
///
/// # Examples
///
/// ```
/// use pickfive_engine::{Combination, NumberSet};
///
/// let combo = Combination::new(&[1, 5, 12, 23, 39]).unwrap();
/// assert_eq!(combo.len(), 5);
/// assert!(combo.contains(23));
///
/// let evens: NumberSet = [2, 12, 22, 32].into_iter().collect();
/// assert_eq!(combo.count_in(evens), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination {
    values: ArrayVec<u8, MAX_PICK_COUNT>,
}

/// A tuple that violates the combination invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CombinationError {
    #[display("combination holds {len} values, the supported maximum is {MAX_PICK_COUNT}")]
    TooManyValues { len: usize },
    #[display("combination values must be strictly ascending")]
    NotAscending,
    #[display("combination value {number} is outside 1..={MAX_POOL_SIZE}")]
    ValueOutOfRange { number: u8 },
}

impl Combination {
    /// Builds a combination from an ascending tuple of distinct numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CombinationError`] if the tuple is longer than
    /// `MAX_PICK_COUNT`, contains an out-of-range value, or is not strictly
    /// ascending (which also rules out duplicates).
    pub fn new(values: &[u8]) -> Result<Self, CombinationError> {
        if values.len() > MAX_PICK_COUNT {
            return Err(CombinationError::TooManyValues { len: values.len() });
        }
        for &number in values {
            if !(1..=MAX_POOL_SIZE).contains(&number) {
                return Err(CombinationError::ValueOutOfRange { number });
            }
        }
        if !values.is_sorted_by(|a, b| a < b) {
            return Err(CombinationError::NotAscending);
        }
        Ok(Self {
            values: values.iter().copied().collect(),
        })
    }

    /// Builds a combination the generator already knows to be valid.
    pub(crate) fn from_ascending(values: ArrayVec<u8, MAX_PICK_COUNT>) -> Self {
        debug_assert!(values.is_sorted_by(|a, b| a < b));
        Self { values }
    }

    /// The tuple values in ascending order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of values in the tuple (the universe's pick count).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks whether `number` is one of the tuple values.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.values.contains(&number)
    }

    /// Counts how many tuple values are members of `set`.
    #[must_use]
    pub fn count_in(&self, set: NumberSet) -> usize {
        self.as_number_set().overlap(set)
    }

    /// The tuple values as a [`NumberSet`] mask.
    #[must_use]
    pub fn as_number_set(&self) -> NumberSet {
        self.values.iter().copied().collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, number) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{number:02}")?;
        }
        Ok(())
    }
}

impl Serialize for Combination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.values.iter())
    }
}

impl<'de> Deserialize<'de> for Combination {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<u8>::deserialize(deserializer)?;
        Self::new(&values).map_err(serde::de::Error::custom)
    }
}
