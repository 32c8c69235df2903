use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque stable team identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unordered pair of distinct teams.
///
/// Stored with the smaller id first, so equality and hashing are insensitive
/// to the order the two teams were given in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnorderedPair {
    low: TeamId,
    high: TeamId,
}

impl UnorderedPair {
    /// Create a canonical pair. Argument order does not matter.
    ///
    /// Callers must pass two distinct teams; a team never meets itself.
    pub fn new(a: TeamId, b: TeamId) -> Self {
        debug_assert_ne!(a, b, "a pair needs two distinct teams");
        if a < b {
            UnorderedPair { low: a, high: b }
        } else {
            UnorderedPair { low: b, high: a }
        }
    }

    /// Smaller endpoint.
    pub fn low(&self) -> TeamId {
        self.low
    }

    /// Larger endpoint.
    pub fn high(&self) -> TeamId {
        self.high
    }

    /// Both endpoints, in canonical order.
    pub fn teams(&self) -> (TeamId, TeamId) {
        (self.low, self.high)
    }

    /// Whether `team` is one of the endpoints.
    pub fn contains(&self, team: TeamId) -> bool {
        self.low == team || self.high == team
    }

    /// The endpoint opposite `team`, if `team` is an endpoint.
    pub fn other(&self, team: TeamId) -> Option<TeamId> {
        if team == self.low {
            Some(self.high)
        } else if team == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for UnorderedPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_insensitive_equality() {
        let ab = UnorderedPair::new(TeamId(3), TeamId(7));
        let ba = UnorderedPair::new(TeamId(7), TeamId(3));
        assert_eq!(ab, ba);
        assert_eq!(ab.teams(), (TeamId(3), TeamId(7)));
    }

    #[test]
    fn test_order_insensitive_hash() {
        let mut set = HashSet::new();
        set.insert(UnorderedPair::new(TeamId(1), TeamId(2)));
        assert!(set.contains(&UnorderedPair::new(TeamId(2), TeamId(1))));
        assert!(!set.contains(&UnorderedPair::new(TeamId(1), TeamId(3))));
    }

    #[test]
    fn test_contains_and_other() {
        let pair = UnorderedPair::new(TeamId(5), TeamId(2));
        assert!(pair.contains(TeamId(2)));
        assert!(pair.contains(TeamId(5)));
        assert!(!pair.contains(TeamId(4)));
        assert_eq!(pair.other(TeamId(2)), Some(TeamId(5)));
        assert_eq!(pair.other(TeamId(5)), Some(TeamId(2)));
        assert_eq!(pair.other(TeamId(9)), None);
    }
}
