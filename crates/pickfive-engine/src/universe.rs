use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{
    UniverseError,
    core::{Combination, MAX_PICK_COUNT, MAX_POOL_SIZE},
};

/// Parameters of the combination universe: pick `pick_count` distinct numbers
/// out of `1..=pool_size`.
///
/// Parameters are validated once, before any generation or filtering runs;
/// invalid values are a configuration error, not a runtime one.
///
/// # Examples
///
/// ```
/// use pickfive_engine::UniverseSpec;
///
/// let spec = UniverseSpec::new(6, 3);
/// assert_eq!(spec.combination_count(), 20);
///
/// let universe = spec.generate().unwrap();
/// assert_eq!(universe.len(), 20);
/// assert_eq!(universe[0].values(), &[1, 2, 3]);
/// assert_eq!(universe[19].values(), &[4, 5, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseSpec {
    /// Numbers are drawn from `1..=pool_size`.
    pub pool_size: u8,
    /// Distinct numbers per combination.
    pub pick_count: usize,
}

impl UniverseSpec {
    /// The standard game: 5 numbers out of 39, a universe of 575,757
    /// combinations.
    pub const DEFAULT: Self = Self {
        pool_size: 39,
        pick_count: 5,
    };

    #[must_use]
    pub const fn new(pool_size: u8, pick_count: usize) -> Self {
        Self {
            pool_size,
            pick_count,
        }
    }

    /// Checks the parameters without generating anything.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError`] for a zero pool or pick count, a pick count
    /// larger than the pool, or parameters beyond the supported bounds
    /// (`MAX_POOL_SIZE`, `MAX_PICK_COUNT`).
    pub fn validate(self) -> Result<(), UniverseError> {
        if self.pool_size == 0 {
            return Err(UniverseError::EmptyPool);
        }
        if self.pick_count == 0 {
            return Err(UniverseError::EmptyPick);
        }
        if self.pool_size > MAX_POOL_SIZE {
            return Err(UniverseError::PoolTooLarge {
                pool_size: self.pool_size,
            });
        }
        if self.pick_count > MAX_PICK_COUNT {
            return Err(UniverseError::PickTooLarge {
                pick_count: self.pick_count,
            });
        }
        if self.pick_count > usize::from(self.pool_size) {
            return Err(UniverseError::PickExceedsPool {
                pick_count: self.pick_count,
                pool_size: self.pool_size,
            });
        }
        Ok(())
    }

    /// Number of combinations in the universe, C(`pool_size`, `pick_count`).
    ///
    /// Returns 0 when the pick count exceeds the pool.
    #[must_use]
    pub fn combination_count(self) -> u64 {
        let n = u64::from(self.pool_size);
        let k = self.pick_count as u64;
        if k > n {
            return 0;
        }
        // Multiplicative form; each intermediate product is exactly divisible.
        let k = k.min(n - k);
        let mut count = 1;
        for i in 1..=k {
            count = count * (n - k + i) / i;
        }
        count
    }

    /// Generates the exhaustive universe in lexicographic order.
    ///
    /// Every combination is an ascending tuple; the first is
    /// `(1, 2, ..., k)` and the last is `(N-k+1, ..., N)`.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError`] if the parameters fail [`Self::validate`].
    pub fn generate(self) -> Result<Vec<Combination>, UniverseError> {
        self.validate()?;

        let pool = self.pool_size;
        let pick = self.pick_count;
        let mut combos = Vec::with_capacity(usize::try_from(self.combination_count()).unwrap_or(0));

        #[expect(clippy::cast_possible_truncation)]
        let mut current: ArrayVec<u8, MAX_PICK_COUNT> = (1..=pick as u8).collect();

        loop {
            combos.push(Combination::from_ascending(current.clone()));

            // Advance the rightmost slot that still has headroom; slots to
            // its right restart just above it.
            let mut i = pick;
            loop {
                if i == 0 {
                    return Ok(combos);
                }
                i -= 1;
                #[expect(clippy::cast_possible_truncation)]
                let slot_max = pool - (pick - 1 - i) as u8;
                if current[i] < slot_max {
                    break;
                }
            }
            current[i] += 1;
            for j in i + 1..pick {
                current[j] = current[j - 1] + 1;
            }
        }
    }
}

impl Default for UniverseSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_validate_rejects_degenerate_parameters() {
        assert_eq!(
            UniverseSpec::new(0, 5).validate(),
            Err(UniverseError::EmptyPool)
        );
        assert_eq!(
            UniverseSpec::new(39, 0).validate(),
            Err(UniverseError::EmptyPick)
        );
        assert_eq!(
            UniverseSpec::new(4, 5).validate(),
            Err(UniverseError::PickExceedsPool {
                pick_count: 5,
                pool_size: 4
            })
        );
        assert_eq!(
            UniverseSpec::new(64, 5).validate(),
            Err(UniverseError::PoolTooLarge { pool_size: 64 })
        );
        assert_eq!(
            UniverseSpec::new(39, 11).validate(),
            Err(UniverseError::PickTooLarge { pick_count: 11 })
        );
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(UniverseSpec::new(6, 3).combination_count(), 20);
        assert_eq!(UniverseSpec::new(39, 5).combination_count(), 575_757);
        assert_eq!(UniverseSpec::new(5, 5).combination_count(), 1);
        assert_eq!(UniverseSpec::new(4, 5).combination_count(), 0);
    }

    #[test]
    fn test_generate_small_universe() {
        let universe = UniverseSpec::new(6, 3).generate().unwrap();
        assert_eq!(universe.len(), 20);
        assert_eq!(universe[0].values(), &[1, 2, 3]);
        assert_eq!(universe[1].values(), &[1, 2, 4]);
        assert_eq!(universe[19].values(), &[4, 5, 6]);
    }

    #[test]
    fn test_generate_is_lexicographic_and_duplicate_free() {
        let universe = UniverseSpec::new(8, 4).generate().unwrap();
        assert_eq!(universe.len(), 70);

        for window in universe.windows(2) {
            assert!(
                window[0] < window[1],
                "expected {} < {}",
                window[0],
                window[1]
            );
        }

        let distinct: HashSet<_> = universe.iter().collect();
        assert_eq!(distinct.len(), universe.len());
    }

    #[test]
    fn test_generate_tuples_are_ascending_and_in_range() {
        let spec = UniverseSpec::new(7, 3);
        for combo in spec.generate().unwrap() {
            assert!(combo.values().is_sorted_by(|a, b| a < b));
            assert!(combo.values().iter().all(|&v| (1..=7).contains(&v)));
            assert_eq!(combo.len(), 3);
        }
    }

    #[test]
    fn test_generate_single_combination_universe() {
        let universe = UniverseSpec::new(5, 5).generate().unwrap();
        assert_eq!(universe.len(), 1);
        assert_eq!(universe[0].values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_generate_default_universe_size() {
        let universe = UniverseSpec::DEFAULT.generate().unwrap();
        assert_eq!(universe.len(), 575_757);
    }
}
