use std::collections::HashSet;

use tracing::{debug, trace};

use crate::constants::DEFAULT_SEARCH_BUDGET;
use crate::deficit::DeficitMatrix;
use crate::error::{Result, ScheduleError};
use crate::pair::{TeamId, UnorderedPair};
use crate::schedule::{validate_roster, ScheduleWeek};

/// Fills the remaining weeks of a season with perfect matchings that consume
/// every pair deficit exactly.
///
/// This is a multigraph decomposition: vertices are teams, edge
/// multiplicities are the remaining deficits, and the goal is to partition
/// the edges into one perfect matching per week. Solved by backtracking over
/// tentative pairings. Every decision point branches on a cloned deficit
/// state instead of undoing mutations, so an abandoned branch can never leave
/// the live state drifted from the true remaining deficits.
pub struct ScheduleCompleter {
    teams: Vec<TeamId>,
    deficits: DeficitMatrix,
    budget: u64,
}

impl ScheduleCompleter {
    /// Set up a completion over `teams` with the given remaining deficits.
    /// The roster must be even, non-empty, and free of duplicates.
    pub fn new(teams: &[TeamId], deficits: DeficitMatrix) -> Result<Self> {
        validate_roster(teams)?;
        Ok(ScheduleCompleter {
            teams: teams.to_vec(),
            deficits,
            budget: DEFAULT_SEARCH_BUDGET,
        })
    }

    /// Cap the number of tentative pairings the search may try. Exceeding the
    /// cap reports `SearchBudgetExceeded`, leaving open whether a completion
    /// exists.
    pub fn with_budget(mut self, max_steps: u64) -> Self {
        self.budget = max_steps;
        self
    }

    /// Search for `weeks` perfect matchings that together consume every
    /// deficit exactly.
    ///
    /// Fast-fails with `CapacityMismatch` when the total remaining meetings
    /// cannot fill the weekly slots exactly; this is checked before any
    /// search. An exhausted search reports `InfeasibleSchedule`. The search
    /// order is fixed (roster order, ties broken by team id), so identical
    /// inputs produce identical schedules.
    pub fn complete(&self, weeks: usize) -> Result<Vec<ScheduleWeek>> {
        let half = self.teams.len() / 2;
        let needed = self.deficits.total();
        let capacity = (weeks * half) as u32;
        if needed != capacity {
            return Err(ScheduleError::CapacityMismatch { needed, capacity });
        }
        if weeks == 0 {
            return Ok(Vec::new());
        }

        let mut search = Search {
            teams: &self.teams,
            weeks_to_fill: weeks,
            steps: 0,
            budget: self.budget,
        };
        let mut out = Vec::with_capacity(weeks);
        let found = search.extend(self.deficits.clone(), Vec::new(), &mut out)?;
        debug!(steps = search.steps, found, "completion search finished");
        if found {
            Ok(out)
        } else {
            Err(ScheduleError::InfeasibleSchedule)
        }
    }
}

struct Search<'a> {
    teams: &'a [TeamId],
    weeks_to_fill: usize,
    steps: u64,
    budget: u64,
}

impl Search<'_> {
    /// Every tentative pairing costs one step of the budget.
    fn spend(&mut self) -> Result<()> {
        if self.steps >= self.budget {
            return Err(ScheduleError::SearchBudgetExceeded {
                budget: self.budget,
            });
        }
        self.steps += 1;
        Ok(())
    }

    /// Extend the partial current week by one pairing, rolling over into the
    /// next week when the matching is complete. Returns whether a full
    /// completion was found in this branch; the budget error aborts every
    /// branch.
    fn extend(
        &mut self,
        deficits: DeficitMatrix,
        week: Vec<(TeamId, TeamId)>,
        weeks: &mut Vec<ScheduleWeek>,
    ) -> Result<bool> {
        let half = self.teams.len() / 2;
        if week.len() == half {
            weeks.push(ScheduleWeek::from_pairs(&week));
            if weeks.len() == self.weeks_to_fill {
                // The capacity precheck guarantees the deficits are spent
                // once every slot is filled.
                debug_assert!(deficits.is_empty());
                return Ok(true);
            }
            if self.extend(deficits, Vec::new(), weeks)? {
                return Ok(true);
            }
            trace!(week = weeks.len(), "no completion behind this week, backtracking");
            weeks.pop();
            return Ok(false);
        }

        let used: HashSet<TeamId> = week.iter().flat_map(|&(a, b)| [a, b]).collect();
        let team = match self.most_constrained(&deficits, &used) {
            Some(team) => team,
            None => return Ok(false),
        };

        let mut candidates: Vec<TeamId> = self
            .teams
            .iter()
            .copied()
            .filter(|&opp| opp != team && !used.contains(&opp) && deficits.get(team, opp) > 0)
            .collect();
        // Most-constrained candidate first; team id breaks ties so the
        // search order, and with it the output, is reproducible.
        candidates.sort_by_key(|&opp| (self.options(&deficits, &used, opp, team), opp));

        for opp in candidates {
            self.spend()?;
            let mut branch = deficits.clone();
            branch.consume(UnorderedPair::new(team, opp));
            let mut branch_week = week.clone();
            branch_week.push((team, opp));
            if self.extend(branch, branch_week, weeks)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The not-yet-paired team with the fewest legal opponents this week.
    /// A team with zero options is still returned so the caller fails the
    /// week immediately instead of pairing around the dead end.
    fn most_constrained(&self, deficits: &DeficitMatrix, used: &HashSet<TeamId>) -> Option<TeamId> {
        let mut best = None;
        let mut best_options = usize::MAX;
        for &team in self.teams {
            if used.contains(&team) {
                continue;
            }
            let options = self.options(deficits, used, team, team);
            if options < best_options {
                best_options = options;
                best = Some(team);
            }
        }
        best
    }

    /// How many legal opponents `team` has this week, not counting `exclude`.
    fn options(
        &self,
        deficits: &DeficitMatrix,
        used: &HashSet<TeamId>,
        team: TeamId,
        exclude: TeamId,
    ) -> usize {
        self.teams
            .iter()
            .filter(|&&opp| {
                opp != team
                    && opp != exclude
                    && !used.contains(&opp)
                    && deficits.get(team, opp) > 0
            })
            .count()
    }
}
