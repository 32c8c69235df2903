use thiserror::Error;

use crate::pair::TeamId;

/// Errors produced by the scheduling and scoring engine.
///
/// All failures are pure return values: no operation ever hands the caller a
/// partially built schedule or allocation alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The roster must hold an even, non-zero number of teams.
    #[error("invalid team count {found}: must be even and non-zero")]
    InvalidTeamCount { found: usize },

    /// The same team id appeared twice in the roster.
    #[error("duplicate team {team} in roster")]
    DuplicateTeam { team: TeamId },

    /// A pair has already been scheduled more times than the season quota
    /// allows. `quota` is zero when the pair itself is invalid (a team
    /// meeting itself, or a team outside the roster).
    #[error("pair {team_a}-{team_b} scheduled {scheduled} times against a quota of {quota}")]
    InconsistentPairHistory {
        team_a: TeamId,
        team_b: TeamId,
        scheduled: u32,
        quota: u32,
    },

    /// Total remaining meetings do not match the slot capacity of the weeks
    /// to fill; completion is rejected before any search is attempted.
    #[error("remaining meetings ({needed}) do not equal slot capacity ({capacity})")]
    CapacityMismatch { needed: u32, capacity: u32 },

    /// Exhaustive search proved that no valid completion exists.
    #[error("no valid schedule completion exists for the given deficits")]
    InfeasibleSchedule,

    /// The search spent its step budget before finding a completion or
    /// proving there is none.
    #[error("schedule search exceeded its budget of {budget} steps")]
    SearchBudgetExceeded { budget: u64 },

    /// The points-by-place table must hold exactly one entry per matchup.
    #[error("points table has {places} places for {pairs} matchups")]
    PointsTableMismatch { places: usize, pairs: usize },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
