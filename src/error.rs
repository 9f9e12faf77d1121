//! Configuration error type for puzzle setup.

use thiserror::Error;

/// Errors raised while constructing a puzzle.
///
/// Move validation never returns these; illegal moves are reported as a
/// boolean `false` by the state machine. This type only covers setups that
/// can never produce a playable puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("actor '{0}' has a zero crossing time")]
    ZeroCrossingTime(String),

    #[error("bridge capacity must be at least 1")]
    ZeroCapacity,

    #[error("bridge time limit must be at least 1 minute")]
    ZeroTimeLimit,

    #[error("roster must contain at least one actor")]
    EmptyRoster,

    #[error("unknown actor name: '{0}'")]
    UnknownActor(String),
}
