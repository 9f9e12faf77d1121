//! Scenario descriptions: the setup values a puzzle is built from.
//!
//! Scenarios deserialize from JSON so the CLI can load alternate setups,
//! and may embed a canned solution (a list of named moves) for replay.

use serde::{Deserialize, Serialize};

use crate::actor::{Actor, Roster};
use crate::bridge::Bridge;
use crate::error::ConfigError;
use crate::moves::{Direction, Move};
use crate::state::PuzzleState;

/// One roster entry: a name and a crossing time in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSpec {
    pub name: String,
    pub minutes: u32,
}

/// A move named by actor rather than by id, as written in scenario files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSpec {
    pub group: Vec<String>,
    pub direction: Direction,
}

/// The complete setup for one puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub actors: Vec<ActorSpec>,
    pub capacity: usize,
    #[serde(rename = "timeLimit")]
    pub time_limit: u32,
    #[serde(default)]
    pub solution: Option<Vec<MoveSpec>>,
}

impl Scenario {
    /// The canonical setup: four actors at 1/2/5/10 minutes, a two-person
    /// bridge, a 17-minute budget, and the five-move optimal solution.
    pub fn classic() -> Self {
        let spec = |name: &str, minutes| ActorSpec {
            name: name.to_string(),
            minutes,
        };
        let mv = |group: &[&str], direction| MoveSpec {
            group: group.iter().map(|s| s.to_string()).collect(),
            direction,
        };
        Self {
            actors: vec![
                spec("You", 1),
                spec("Lab Assistant", 2),
                spec("Worker", 5),
                spec("Scientist", 10),
            ],
            capacity: 2,
            time_limit: 17,
            solution: Some(vec![
                mv(&["You", "Lab Assistant"], Direction::Forward),
                mv(&["You"], Direction::Backward),
                mv(&["Worker", "Scientist"], Direction::Forward),
                mv(&["Lab Assistant"], Direction::Backward),
                mv(&["You", "Lab Assistant"], Direction::Forward),
            ]),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the runnable puzzle state, validating the whole setup.
    pub fn build(&self) -> Result<PuzzleState, ConfigError> {
        let actors = self
            .actors
            .iter()
            .map(|a| Actor::new(a.name.clone(), a.minutes))
            .collect::<Result<Vec<_>, _>>()?;
        let roster = Roster::new(actors)?;
        let bridge = Bridge::new(self.capacity, self.time_limit)?;
        Ok(PuzzleState::new(roster, bridge))
    }

    /// Resolve a named move against a roster.
    pub fn resolve_move(spec: &MoveSpec, roster: &Roster) -> Result<Move, ConfigError> {
        let mut group = Vec::with_capacity(spec.group.len());
        for name in &spec.group {
            let id = roster
                .find(name)
                .ok_or_else(|| ConfigError::UnknownActor(name.clone()))?;
            group.push(id);
        }
        Ok(Move::new(group, spec.direction))
    }
}
