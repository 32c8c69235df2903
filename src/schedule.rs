use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, ScheduleError};
use crate::pair::{TeamId, UnorderedPair};

/// One matchup slot within a week.
///
/// `pair_index` is purely positional and stable only within its own week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub pair_index: usize,
    pub team_a: TeamId,
    pub team_b: TeamId,
}

/// A week's worth of pairings.
///
/// Invariant: every team of the roster appears in exactly one pairing
/// (perfect matching).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWeek {
    pub pairings: Vec<Pairing>,
}

impl ScheduleWeek {
    /// Build a week from ordered pairs, assigning positional indices.
    pub fn from_pairs(pairs: &[(TeamId, TeamId)]) -> Self {
        ScheduleWeek {
            pairings: pairs
                .iter()
                .enumerate()
                .map(|(i, &(a, b))| Pairing {
                    pair_index: i,
                    team_a: a,
                    team_b: b,
                })
                .collect(),
        }
    }

    /// Canonical unordered pairs of the week, one per pairing.
    pub fn pairs(&self) -> impl Iterator<Item = UnorderedPair> + '_ {
        self.pairings.iter().map(|p| UnorderedPair::new(p.team_a, p.team_b))
    }

    /// Whether the week pairs every roster team exactly once.
    pub fn is_perfect_matching(&self, teams: &[TeamId]) -> bool {
        let mut seen = HashSet::with_capacity(teams.len());
        for p in &self.pairings {
            if p.team_a == p.team_b || !seen.insert(p.team_a) || !seen.insert(p.team_b) {
                return false;
            }
        }
        seen.len() == teams.len() && teams.iter().all(|t| seen.contains(t))
    }
}

/// Reject rosters that cannot be scheduled: odd or empty team counts, and
/// duplicate ids.
pub(crate) fn validate_roster(teams: &[TeamId]) -> Result<()> {
    if teams.is_empty() || teams.len() % 2 != 0 {
        return Err(ScheduleError::InvalidTeamCount { found: teams.len() });
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for &team in teams {
        if !seen.insert(team) {
            return Err(ScheduleError::DuplicateTeam { team });
        }
    }
    Ok(())
}

/// Single round-robin via the circle method.
///
/// The first team stays fixed while the rest rotate by one position each
/// round; within a round the fixed team meets the rotation's tail and the
/// remaining teams pair up by reflecting the rotation end-to-end. Produces
/// N-1 rounds in which every unordered pair appears exactly once. The result
/// is deterministic for a given roster order.
pub fn round_robin(teams: &[TeamId]) -> Result<Vec<ScheduleWeek>> {
    validate_roster(teams)?;
    let n = teams.len();
    let half = n / 2;
    let fixed = teams[0];
    let mut rot: Vec<TeamId> = teams[1..].to_vec();

    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        // Left column: fixed team plus the head of the rotation; right
        // column: the rest of the rotation reversed.
        let mut pairs = Vec::with_capacity(half);
        for i in 0..half {
            let a = if i == 0 { fixed } else { rot[i - 1] };
            let b = rot[n - 2 - i];
            pairs.push((a, b));
        }
        rounds.push(ScheduleWeek::from_pairs(&pairs));
        rot.rotate_right(1);
    }
    Ok(rounds)
}

/// Full double round-robin: the single round-robin followed by the same
/// rounds with each pairing's members swapped (the reciprocal meetings),
/// truncated to `season_weeks` if the season is shorter.
pub fn double_round_robin(teams: &[TeamId], season_weeks: usize) -> Result<Vec<ScheduleWeek>> {
    let mut weeks = round_robin(teams)?;
    let swapped: Vec<ScheduleWeek> = weeks
        .iter()
        .map(|week| ScheduleWeek {
            pairings: week
                .pairings
                .iter()
                .map(|p| Pairing {
                    pair_index: p.pair_index,
                    team_a: p.team_b,
                    team_b: p.team_a,
                })
                .collect(),
        })
        .collect();
    weeks.extend(swapped);
    weeks.truncate(season_weeks);
    Ok(weeks)
}
