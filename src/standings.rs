use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::pair::TeamId;

/// Season-to-date line for one team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: TeamId,
    /// Sum of weekly awarded points.
    pub season_points: f64,
    /// Sum of raw weekly scores, the first tie-breaker.
    pub raw_score_sum: f64,
    /// Weeks for which the team has an award.
    pub weeks_played: usize,
    /// Points awarded in the team's most recent scored week.
    pub last_week_points: Option<f64>,
}

/// Aggregate weekly per-team awards and raw scores into season standings.
///
/// `weekly_awards[w]` holds the (team, points) entries for week `w`, and
/// `weekly_scores[w]` that week's raw scores. Teams with no entries still get
/// a row with zeros. Rows are ordered by season points, then raw score sum,
/// both descending, then team id.
pub fn season_standings(
    teams: &[TeamId],
    weekly_awards: &[Vec<(TeamId, f64)>],
    weekly_scores: &[HashMap<TeamId, f64>],
) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = teams
        .iter()
        .map(|&team| {
            let mut season_points = 0.0;
            let mut weeks_played = 0;
            let mut last_week_points = None;
            for week in weekly_awards {
                for &(t, points) in week {
                    if t == team {
                        season_points += points;
                        weeks_played += 1;
                        last_week_points = Some(points);
                    }
                }
            }
            let raw_score_sum = weekly_scores
                .iter()
                .filter_map(|week| week.get(&team))
                .sum();
            TeamStanding {
                team,
                season_points,
                raw_score_sum,
                weeks_played,
                last_week_points,
            }
        })
        .collect();

    rows.sort_by(|x, y| {
        y.season_points
            .partial_cmp(&x.season_points)
            .unwrap_or(Ordering::Equal)
            .then(
                y.raw_score_sum
                    .partial_cmp(&x.raw_score_sum)
                    .unwrap_or(Ordering::Equal),
            )
            .then(x.team.cmp(&y.team))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_and_ordering() {
        let teams = vec![TeamId(1), TeamId(2), TeamId(3)];
        let weekly_awards = vec![
            vec![(TeamId(1), 8.0), (TeamId(2), 5.0), (TeamId(3), 5.0)],
            vec![(TeamId(1), 1.0), (TeamId(2), 8.0), (TeamId(3), 3.0)],
        ];
        let weekly_scores = vec![
            [(TeamId(1), 70.0), (TeamId(2), 55.0), (TeamId(3), 60.0)]
                .into_iter()
                .collect(),
            [(TeamId(1), 40.0), (TeamId(2), 80.0), (TeamId(3), 50.0)]
                .into_iter()
                .collect(),
        ];

        let rows = season_standings(&teams, &weekly_awards, &weekly_scores);
        assert_eq!(rows[0].team, TeamId(2));
        assert_eq!(rows[0].season_points, 13.0);
        assert_eq!(rows[0].raw_score_sum, 135.0);
        assert_eq!(rows[0].weeks_played, 2);
        assert_eq!(rows[0].last_week_points, Some(8.0));
        assert_eq!(rows[1].team, TeamId(1));
        assert_eq!(rows[2].team, TeamId(3));
    }

    #[test]
    fn test_raw_score_breaks_points_tie() {
        let teams = vec![TeamId(1), TeamId(2)];
        let weekly_awards = vec![vec![(TeamId(1), 5.0), (TeamId(2), 5.0)]];
        let weekly_scores = vec![[(TeamId(1), 40.0), (TeamId(2), 60.0)].into_iter().collect()];

        let rows = season_standings(&teams, &weekly_awards, &weekly_scores);
        assert_eq!(rows[0].team, TeamId(2));
    }

    #[test]
    fn test_team_without_entries_gets_zero_row() {
        let teams = vec![TeamId(1), TeamId(2)];
        let weekly_awards = vec![vec![(TeamId(1), 5.0)]];

        let rows = season_standings(&teams, &weekly_awards, &[]);
        assert_eq!(rows[1].team, TeamId(2));
        assert_eq!(rows[1].season_points, 0.0);
        assert_eq!(rows[1].weeks_played, 0);
        assert_eq!(rows[1].last_week_points, None);
    }
}
