//! Bridge-and-flashlight crossing puzzle.
//!
//! A fixed group of actors, each with an individual crossing time, must
//! all cross a limited-capacity bridge sharing a single light within a
//! time budget. This crate is the puzzle state machine: move legality,
//! time accounting, and win/lose determination. Rendering and input live
//! in the CLI binary.
//!
//! `PuzzleState` is a plain owned value with no interior locking; keep one
//! owner per game session.

pub mod actor;
pub mod bridge;
pub mod error;
pub mod light;
pub mod moves;
pub mod scenario;
pub mod state;

// Re-export main types
pub use actor::{Actor, ActorId, Roster};
pub use bridge::Bridge;
pub use error::ConfigError;
pub use light::Light;
pub use moves::{Direction, Move, MoveGroup, Side};
pub use scenario::{ActorSpec, MoveSpec, Scenario};
pub use state::{PuzzleState, PuzzleStatus, Snapshot};
