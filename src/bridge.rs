//! The crossing surface: capacity, time budget, and passable status.

use std::fmt;

use crate::actor::{ActorId, Roster};
use crate::error::ConfigError;

/// The bridge. Capacity and time limit are fixed at construction; only the
/// passable flag changes (destroy / repair). It stores no occupancy; who is
/// where is the state machine's business.
#[derive(Debug, Clone)]
pub struct Bridge {
    capacity: usize,
    time_limit: u32,
    destroyed: bool,
}

impl Bridge {
    /// Create a bridge. Capacity and time limit must both be positive.
    pub fn new(capacity: usize, time_limit: u32) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if time_limit == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(Self {
            capacity,
            time_limit,
            destroyed: false,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    /// Can this group step onto the bridge? False when the bridge is out,
    /// the group is empty, or the group exceeds capacity.
    ///
    /// Light possession is not checked here; the state machine enforces
    /// that. Surface rules only.
    pub fn can_cross(&self, group: &[ActorId]) -> bool {
        !self.destroyed && !group.is_empty() && group.len() <= self.capacity
    }

    /// Crossing time for a group: the slowest member sets the pace.
    /// An empty group takes zero minutes.
    pub fn crossing_time(&self, group: &[ActorId], roster: &Roster) -> u32 {
        group
            .iter()
            .map(|&id| roster.get(id).crossing_minutes())
            .max()
            .unwrap_or(0)
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn repair(&mut self) {
        self.destroyed = false;
    }

    pub fn is_passable(&self) -> bool {
        !self.destroyed
    }
}

impl fmt::Display for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.destroyed { "destroyed" } else { "passable" };
        write!(
            f,
            "Bridge (capacity: {}, time limit: {} min, status: {})",
            self.capacity, self.time_limit, status
        )
    }
}
