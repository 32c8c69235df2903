//! League Core - season scheduling and scoring engine.
//!
//! This library builds and completes double round-robin match schedules for a
//! fixed-size league and converts raw weekly team scores into rank-based
//! points with tie-averaging. It is the pure computational core: HTTP
//! routing, authentication, persistence, and score ingestion live in outer
//! layers that feed it in-memory values and persist what it returns.
//!
//! ## Features
//! - Balanced double round-robin generation (circle method)
//! - Completion of a partially fixed schedule under exact pair-multiplicity
//!   constraints, via budget-bounded backtracking search
//! - Weekly points allocation with average-of-places tie handling
//! - Season standings aggregation
//!
//! Every operation is a deterministic, synchronous function over values; the
//! crate holds no state across calls.

pub mod completer;
pub mod constants;
pub mod deficit;
pub mod error;
pub mod pair;
pub mod points;
pub mod schedule;
pub mod standings;

pub use completer::ScheduleCompleter;
pub use constants::{DEFAULT_SEARCH_BUDGET, REQUIRED_MEETINGS, SEASON_WEEKS, WEEK_POINTS};
pub use deficit::DeficitMatrix;
pub use error::{Result, ScheduleError};
pub use pair::{TeamId, UnorderedPair};
pub use points::{allocate_points, team_awards, weekly_sums, MatchupSum, PointsAward};
pub use schedule::{double_round_robin, round_robin, Pairing, ScheduleWeek};
pub use standings::{season_standings, TeamStanding};
