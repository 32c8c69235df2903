use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Result, ScheduleError};
use crate::pair::TeamId;
use crate::schedule::ScheduleWeek;

/// One matchup's combined score for a week.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupSum {
    pub pair_index: usize,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub score_a: f64,
    pub score_b: f64,
    pub sum: f64,
}

/// Points awarded to one matchup for a week.
///
/// `rank` is 1-based; tied matchups share a rank and the averaged points of
/// their place block, so points may be fractional.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsAward {
    pub pair_index: usize,
    pub rank: usize,
    pub points: f64,
}

/// Combine per-team scores into per-matchup sums for one week.
///
/// A team with no recorded score counts as 0; missing scores are never an
/// error.
pub fn weekly_sums(week: &ScheduleWeek, scores: &HashMap<TeamId, f64>) -> Vec<MatchupSum> {
    week.pairings
        .iter()
        .map(|p| {
            let score_a = scores.get(&p.team_a).copied().unwrap_or(0.0);
            let score_b = scores.get(&p.team_b).copied().unwrap_or(0.0);
            MatchupSum {
                pair_index: p.pair_index,
                team_a: p.team_a,
                team_b: p.team_b,
                score_a,
                score_b,
                sum: score_a + score_b,
            }
        })
        .collect()
}

/// Allocate rank-based points for one week.
///
/// Matchups are ranked by descending sum. Each maximal run of identical sums
/// (exact equality, no epsilon) occupies a contiguous block of places, and
/// every matchup in the run is awarded the arithmetic mean of that block's
/// table entries, so the total handed out always equals the total of the
/// table. Awards come back in pair-index order.
///
/// The table must hold exactly one entry per matchup; any other length is a
/// contract violation (`PointsTableMismatch`). An empty week allocates
/// nothing.
pub fn allocate_points(sums: &[MatchupSum], table: &[f64]) -> Result<Vec<PointsAward>> {
    if sums.is_empty() {
        return Ok(Vec::new());
    }
    if table.len() != sums.len() {
        return Err(ScheduleError::PointsTableMismatch {
            places: table.len(),
            pairs: sums.len(),
        });
    }

    let mut sorted: Vec<&MatchupSum> = sums.iter().collect();
    sorted.sort_by(|x, y| y.sum.partial_cmp(&x.sum).unwrap_or(Ordering::Equal));

    let mut awards = Vec::with_capacity(sorted.len());
    let mut place = 0;
    while place < sorted.len() {
        let mut end = place + 1;
        while end < sorted.len() && sorted[end].sum == sorted[place].sum {
            end += 1;
        }
        let count = end - place;
        let points = table[place..end].iter().sum::<f64>() / count as f64;
        for entry in &sorted[place..end] {
            awards.push(PointsAward {
                pair_index: entry.pair_index,
                rank: place + 1,
                points,
            });
        }
        place = end;
    }

    awards.sort_by_key(|award| award.pair_index);
    Ok(awards)
}

/// Expand matchup awards into per-team awards: both teams of a matchup
/// receive the matchup's points. A matchup without an award counts as 0.
pub fn team_awards(sums: &[MatchupSum], awards: &[PointsAward]) -> Vec<(TeamId, f64)> {
    let by_index: HashMap<usize, f64> = awards.iter().map(|a| (a.pair_index, a.points)).collect();
    sums.iter()
        .flat_map(|m| {
            let points = by_index.get(&m.pair_index).copied().unwrap_or(0.0);
            [(m.team_a, points), (m.team_b, points)]
        })
        .collect()
}
