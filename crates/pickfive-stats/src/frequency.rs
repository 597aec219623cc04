use pickfive_engine::{Combination, MAX_POOL_SIZE};
use serde::{Deserialize, Serialize};

/// One number's occurrence count within a survivor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub number: u8,
    pub count: u64,
}

/// Ranked per-number occurrence counts over a survivor set.
///
/// Entries are ordered by descending count; equal counts order by ascending
/// number, so the ranking is fully deterministic. Numbers that never occur
/// are omitted entirely — a table never contains a zero count.
///
/// # Examples
///
/// ```
/// use pickfive_engine::Combination;
/// use pickfive_stats::FrequencyTable;
///
/// let survivors = vec![
///     Combination::new(&[1, 2, 3]).unwrap(),
///     Combination::new(&[2, 3, 4]).unwrap(),
/// ];
/// let table = FrequencyTable::tally(&survivors);
///
/// // 2 and 3 tie at two occurrences; the smaller number ranks first.
/// let top: Vec<(u8, u64)> = table.entries().iter().map(|e| (e.number, e.count)).collect();
/// assert_eq!(top, vec![(2, 2), (3, 2), (1, 1), (4, 1)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Tallies every value across the survivor set.
    ///
    /// An empty survivor set yields an empty table.
    #[must_use]
    pub fn tally(combos: &[Combination]) -> Self {
        let mut counts = [0_u64; MAX_POOL_SIZE as usize + 1];
        for combo in combos {
            for &value in combo.values() {
                counts[usize::from(value)] += 1;
            }
        }

        #[expect(clippy::cast_possible_truncation)]
        let mut entries: Vec<FrequencyEntry> = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(number, &count)| FrequencyEntry {
                number: number as u8,
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
        Self { entries }
    }

    /// The ranked entries, most frequent first.
    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of distinct numbers that occur at least once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrence count for one number; 0 when it never occurs.
    #[must_use]
    pub fn count_of(&self, number: u8) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.number == number)
            .map_or(0, |entry| entry.count)
    }
}
