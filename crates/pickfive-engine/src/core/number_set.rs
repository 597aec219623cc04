use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest number a [`NumberSet`] can hold.
///
/// Sets are stored as a single 64-bit mask with bit `n` representing the
/// number `n`; bit 0 is unused so numbers stay 1-based. Any pool size up to
/// this bound is supported.
pub const MAX_POOL_SIZE: u8 = 63;

/// A set of lottery numbers in `1..=MAX_POOL_SIZE`.
///
/// Backed by a single `u64` bit mask, so membership tests and overlap counts
/// are single mask operations rather than per-element scans. This is the
/// building block of every filter test: position allowed-value sets, criteria
/// pools, and the reference winning draw are all `NumberSet`s.
///
/// # Serialization
///
/// Serializes as the ascending sequence of its members (e.g. `[3, 17, 24]`),
/// which is the shape the presentation collaborators exchange.
///
/// # Examples
///
/// ```
/// use pickfive_engine::NumberSet;
///
/// let set: NumberSet = [5, 12, 31].into_iter().collect();
/// assert!(set.contains(12));
/// assert!(!set.contains(13));
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberSet {
    bits: u64,
}

impl NumberSet {
    pub const EMPTY: Self = Self { bits: 0 };

    /// Inserts a number into the set.
    ///
    /// # Panics
    ///
    /// Panics if `number` is outside `1..=MAX_POOL_SIZE`.
    pub fn insert(&mut self, number: u8) {
        assert!(
            (1..=MAX_POOL_SIZE).contains(&number),
            "number {number} is outside 1..={MAX_POOL_SIZE}"
        );
        self.bits |= 1 << number;
    }

    /// Checks whether the set contains `number`.
    ///
    /// Out-of-range numbers are never members.
    #[inline]
    #[must_use]
    pub fn contains(self, number: u8) -> bool {
        number >= 1 && number <= MAX_POOL_SIZE && (self.bits & (1 << number)) != 0
    }

    /// Number of members in the set.
    #[inline]
    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Counts the members shared with `other`.
    #[inline]
    #[must_use]
    pub fn overlap(self, other: Self) -> usize {
        (self.bits & other.bits).count_ones() as usize
    }

    /// The largest member, if the set is non-empty.
    #[must_use]
    pub fn max(self) -> Option<u8> {
        if self.bits == 0 {
            None
        } else {
            #[expect(clippy::cast_possible_truncation)]
            let number = 63 - self.bits.leading_zeros() as u8;
            Some(number)
        }
    }

    /// Iterates over the members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut bits = self.bits;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            #[expect(clippy::cast_possible_truncation)]
            let number = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(number)
        })
    }
}

impl FromIterator<u8> for NumberSet {
    /// Collects numbers into a set.
    ///
    /// # Panics
    ///
    /// Panics if any number is outside `1..=MAX_POOL_SIZE`.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for number in iter {
            set.insert(number);
        }
        set
    }
}

impl fmt::Debug for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for NumberSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for NumberSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let numbers = Vec::<u8>::deserialize(deserializer)?;
        let mut set = Self::EMPTY;
        for number in numbers {
            if !(1..=MAX_POOL_SIZE).contains(&number) {
                return Err(serde::de::Error::custom(format!(
                    "number {number} is outside 1..={MAX_POOL_SIZE}"
                )));
            }
            set.bits |= 1 << number;
        }
        Ok(set)
    }
}
