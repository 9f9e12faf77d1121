//! Actors and the fixed roster they belong to.
//!
//! Identity is the roster index (`ActorId`), assigned once at setup and
//! never reused. Collection membership is always decided by id, never by
//! comparing full actor values, so the mutable light flag can't change who
//! an actor "is" mid-game.

use std::fmt;

use crate::error::ConfigError;

/// Stable key for an actor: its position in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub usize);

impl ActorId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A person in the puzzle: a name, a fixed crossing time, and whether they
/// are currently holding the light.
#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    crossing_minutes: u32,
    has_light: bool,
}

impl Actor {
    /// Create an actor. Crossing time must be at least one minute.
    pub fn new(name: impl Into<String>, crossing_minutes: u32) -> Result<Self, ConfigError> {
        let name = name.into();
        if crossing_minutes == 0 {
            return Err(ConfigError::ZeroCrossingTime(name));
        }
        Ok(Self {
            name,
            crossing_minutes,
            has_light: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn crossing_minutes(&self) -> u32 {
        self.crossing_minutes
    }

    pub fn has_light(&self) -> bool {
        self.has_light
    }

    pub(crate) fn set_light(&mut self, has_light: bool) {
        self.has_light = has_light;
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} min)", self.name, self.crossing_minutes)?;
        if self.has_light {
            write!(f, " [light]")?;
        }
        Ok(())
    }
}

/// The fixed set of actors in a puzzle, indexed by `ActorId`.
#[derive(Debug, Clone)]
pub struct Roster {
    actors: Vec<Actor>,
}

impl Roster {
    /// Build a roster. Must be non-empty.
    pub fn new(actors: Vec<Actor>) -> Result<Self, ConfigError> {
        if actors.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        Ok(Self { actors })
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Look up an actor. A foreign id is a caller bug and panics.
    pub fn get(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: ActorId) -> &mut Actor {
        &mut self.actors[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> {
        (0..self.actors.len()).map(ActorId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter().enumerate().map(|(i, a)| (ActorId(i), a))
    }

    /// Find an actor by name.
    pub fn find(&self, name: &str) -> Option<ActorId> {
        self.actors.iter().position(|a| a.name == name).map(ActorId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_crossing_time_rejected() {
        let err = Actor::new("Ghost", 0).unwrap_err();
        assert_eq!(err, ConfigError::ZeroCrossingTime("Ghost".to_string()));
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert_eq!(Roster::new(vec![]).unwrap_err(), ConfigError::EmptyRoster);
    }

    #[test]
    fn test_find_by_name() {
        let roster = Roster::new(vec![
            Actor::new("You", 1).unwrap(),
            Actor::new("Worker", 5).unwrap(),
        ])
        .unwrap();

        assert_eq!(roster.find("Worker"), Some(ActorId(1)));
        assert_eq!(roster.find("Nobody"), None);
    }

    #[test]
    fn test_identity_ignores_light_flag() {
        let mut roster = Roster::new(vec![
            Actor::new("You", 1).unwrap(),
            Actor::new("Worker", 5).unwrap(),
        ])
        .unwrap();

        let id = roster.find("You").unwrap();
        roster.get_mut(id).set_light(true);

        // The id still resolves to the same actor after the flag changed.
        assert_eq!(roster.find("You"), Some(id));
        assert!(roster.get(id).has_light());
    }
}
