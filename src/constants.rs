/// Weeks in the league season. A 10-team double round-robin spans 18 rounds,
/// so nothing is truncated at this roster size.
pub const SEASON_WEEKS: usize = 18;

/// Points awarded per weekly place, best matchup sum first.
pub const WEEK_POINTS: [f64; 5] = [8.0, 5.0, 3.0, 2.0, 1.0];

/// How many times each unordered pair meets across a full season.
pub const REQUIRED_MEETINGS: u32 = 2;

/// Default cap on tentative pairings the completer may try before giving up.
pub const DEFAULT_SEARCH_BUDGET: u64 = 1_000_000;
