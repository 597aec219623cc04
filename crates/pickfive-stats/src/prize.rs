use pickfive_engine::{Combination, NumberSet};
use serde::{Deserialize, Serialize};

/// Number of payout tiers in the schedule.
pub const TIER_COUNT: usize = 4;

/// One payout tier: a rank label, the match count that earns it, and the
/// per-winner payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// 1 is the top prize.
    pub rank: u8,
    /// Values shared with the reference draw.
    pub matches: usize,
    pub payout: u64,
}

/// The fixed payout schedule, ordered first place to fourth.
///
/// Matching fewer values than the lowest tier earns nothing; matching all
/// five is the top tier, not an overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTable {
    tiers: [PrizeTier; TIER_COUNT],
}

impl PrizeTable {
    /// The standard 39-choose-5 schedule.
    pub const DEFAULT: Self = Self {
        tiers: [
            PrizeTier {
                rank: 1,
                matches: 5,
                payout: 8_000_000,
            },
            PrizeTier {
                rank: 2,
                matches: 4,
                payout: 200_000,
            },
            PrizeTier {
                rank: 3,
                matches: 3,
                payout: 300,
            },
            PrizeTier {
                rank: 4,
                matches: 2,
                payout: 50,
            },
        ],
    };

    /// The schedule's tiers, first place first.
    #[must_use]
    pub fn tiers(&self) -> &[PrizeTier] {
        &self.tiers
    }

    /// Settles a survivor set against a reference winning draw.
    ///
    /// Each combination's match count is the size of its intersection with
    /// `reference_draw`; combinations below the lowest tier win nothing. An
    /// empty reference draw settles to an all-zero summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use pickfive_engine::Combination;
    /// use pickfive_stats::PrizeTable;
    ///
    /// let survivors = vec![
    ///     Combination::new(&[1, 2, 3, 7, 8]).unwrap(),
    ///     Combination::new(&[1, 2, 6, 7, 8]).unwrap(),
    /// ];
    /// let draw = [1, 2, 3, 4, 5].into_iter().collect();
    ///
    /// let summary = PrizeTable::DEFAULT.settle(draw, &survivors);
    /// assert_eq!(summary.total_prize, 350);
    /// assert_eq!(summary.winners_at(3), 1);
    /// assert_eq!(summary.winners_at(2), 1);
    /// ```
    #[must_use]
    pub fn settle(&self, reference_draw: NumberSet, combos: &[Combination]) -> PrizeSummary {
        let mut tiers = self.tiers.map(|tier| TierWinnings { tier, winners: 0 });
        for combo in combos {
            let matches = combo.count_in(reference_draw);
            if let Some(winnings) = tiers.iter_mut().find(|w| w.tier.matches == matches) {
                winnings.winners += 1;
            }
        }

        let total_prize = tiers.iter().map(|w| w.tier.payout * w.winners).sum();
        PrizeSummary { total_prize, tiers }
    }
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Winner count for one tier of a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWinnings {
    pub tier: PrizeTier,
    pub winners: u64,
}

/// Result of settling a survivor set against a reference draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeSummary {
    /// Sum of every tier's winner count times its payout.
    pub total_prize: u64,
    /// Per-tier winner counts, first place first.
    pub tiers: [TierWinnings; TIER_COUNT],
}

impl PrizeSummary {
    /// Winner count for the tier earned by `matches` shared values; 0 when
    /// no tier matches.
    #[must_use]
    pub fn winners_at(&self, matches: usize) -> u64 {
        self.tiers
            .iter()
            .find(|w| w.tier.matches == matches)
            .map_or(0, |w| w.winners)
    }
}
