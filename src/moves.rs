//! Moves: a group of actors crossing in one direction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::actor::{ActorId, Roster};
use crate::bridge::Bridge;

/// One of the two banks. Everyone starts on the left; winning means
/// everyone on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Crossing direction. Forward goes left to right (toward the goal bank),
/// backward brings the light back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The bank a move in this direction starts from.
    pub fn origin(self) -> Side {
        match self {
            Direction::Forward => Side::Left,
            Direction::Backward => Side::Right,
        }
    }

    /// The bank a move in this direction lands on.
    pub fn destination(self) -> Side {
        self.origin().opposite()
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Forward => "->",
            Direction::Backward => "<-",
        }
    }
}

/// Groups are almost always one or two actors, so keep them inline.
pub type MoveGroup = SmallVec<[ActorId; 2]>;

/// A candidate or executed crossing. Construction does not validate;
/// validity is checked against a bridge, and legality against the full
/// puzzle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    group: MoveGroup,
    direction: Direction,
    time_taken: u32,
    executed: bool,
}

impl Move {
    pub fn new(group: impl IntoIterator<Item = ActorId>, direction: Direction) -> Self {
        Self {
            group: group.into_iter().collect(),
            direction,
            time_taken: 0,
            executed: false,
        }
    }

    pub fn group(&self) -> &[ActorId] {
        &self.group
    }

    /// The actor who ends up holding the light if this move is applied.
    pub fn leader(&self) -> Option<ActorId> {
        self.group.first().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Minutes this move consumed. Zero until executed.
    pub fn time_taken(&self) -> u32 {
        self.time_taken
    }

    pub fn is_executed(&self) -> bool {
        self.executed
    }

    /// Structural validity: the bridge can carry this group.
    pub fn is_valid(&self, bridge: &Bridge) -> bool {
        bridge.can_cross(&self.group)
    }

    /// Minutes this move would take: the slowest group member's pace.
    pub fn duration(&self, bridge: &Bridge, roster: &Roster) -> u32 {
        bridge.crossing_time(&self.group, roster)
    }

    /// Re-validate, then stamp the duration and mark the move executed.
    /// Returns false (and changes nothing) if the bridge rejects the group.
    pub fn execute(&mut self, bridge: &Bridge, roster: &Roster) -> bool {
        if !self.is_valid(bridge) {
            return false;
        }
        self.time_taken = self.duration(bridge, roster);
        self.executed = true;
        true
    }

    /// Human-readable rendering, e.g. "You, Lab Assistant -> (2 min)".
    pub fn label(&self, roster: &Roster) -> String {
        let names: Vec<&str> = self.group.iter().map(|&id| roster.get(id).name()).collect();
        let mut out = format!("{} {}", names.join(", "), self.direction.arrow());
        if self.executed {
            out.push_str(&format!(" ({} min)", self.time_taken));
        }
        out
    }
}
