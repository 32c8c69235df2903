use std::collections::HashMap;

use crate::error::{Result, ScheduleError};
use crate::pair::{TeamId, UnorderedPair};

/// Remaining required meetings per unordered pair.
///
/// Pairs whose deficit has reached zero are dropped rather than stored with a
/// zero count, so iteration only visits pairs that still need a meeting. The
/// matrix is a value: callers derive it fresh from the fixed schedule, hand
/// it to the completer, and discard it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeficitMatrix {
    counts: HashMap<UnorderedPair, u32>,
}

impl DeficitMatrix {
    /// Build the deficit matrix for a roster from the pair occurrences
    /// already fixed in the schedule (one history entry per occurrence,
    /// duplicates allowed, order within an entry irrelevant).
    ///
    /// Every unordered pair starts at `required` and is decremented per
    /// occurrence. A pair scheduled more often than `required`, a team paired
    /// with itself, or a pair naming a team outside the roster is reported as
    /// `InconsistentPairHistory` rather than clamped.
    pub fn from_history(
        teams: &[TeamId],
        history: &[(TeamId, TeamId)],
        required: u32,
    ) -> Result<Self> {
        let mut counts = HashMap::with_capacity(teams.len() * (teams.len().saturating_sub(1)) / 2);
        for (i, &a) in teams.iter().enumerate() {
            for &b in &teams[i + 1..] {
                counts.insert(UnorderedPair::new(a, b), required);
            }
        }

        // Tally occurrences before validating so the error can report how
        // often the offending pair was actually scheduled.
        let mut scheduled: HashMap<(TeamId, TeamId), u32> = HashMap::new();
        for &(a, b) in history {
            let key = if a <= b { (a, b) } else { (b, a) };
            *scheduled.entry(key).or_insert(0) += 1;
        }

        for (&(a, b), &times) in &scheduled {
            let remaining = if a == b {
                None
            } else {
                counts.get_mut(&UnorderedPair::new(a, b))
            };
            match remaining {
                Some(remaining) if times <= *remaining => *remaining -= times,
                Some(_) => {
                    return Err(ScheduleError::InconsistentPairHistory {
                        team_a: a,
                        team_b: b,
                        scheduled: times,
                        quota: required,
                    })
                }
                // Self-pairs and teams outside the roster have no quota.
                None => {
                    return Err(ScheduleError::InconsistentPairHistory {
                        team_a: a,
                        team_b: b,
                        scheduled: times,
                        quota: 0,
                    })
                }
            }
        }

        counts.retain(|_, remaining| *remaining > 0);
        Ok(DeficitMatrix { counts })
    }

    /// Total remaining meetings across all pairs.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Remaining meetings for one pair; zero for satisfied or unknown pairs.
    pub fn get(&self, a: TeamId, b: TeamId) -> u32 {
        if a == b {
            return 0;
        }
        self.counts
            .get(&UnorderedPair::new(a, b))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of pairs that still need at least one meeting.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over pairs with a positive remaining count.
    pub fn iter(&self) -> impl Iterator<Item = (UnorderedPair, u32)> + '_ {
        self.counts.iter().map(|(&pair, &count)| (pair, count))
    }

    /// Consume one meeting of `pair`. Returns false if the pair has no
    /// remaining deficit, leaving the matrix untouched.
    pub(crate) fn consume(&mut self, pair: UnorderedPair) -> bool {
        match self.counts.get_mut(&pair) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&pair);
                }
                true
            }
            None => false,
        }
    }
}
