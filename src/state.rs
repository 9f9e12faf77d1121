//! The puzzle state machine: side partitions, elapsed time, move legality.
//!
//! One mutable `PuzzleState` per game session. Not thread-safe: confine it
//! to a single owner.

use crate::actor::{ActorId, Roster};
use crate::bridge::Bridge;
use crate::light::Light;
use crate::moves::{Direction, Move, Side};

/// Where the game stands. `Won` and `Lost` are both terminal; a move that
/// finishes the crossing exactly at the time limit is a win, not a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStatus {
    InProgress,
    Won,
    Lost,
}

/// Cheap immutable capture of a state, for backtracking and comparison.
/// Two snapshots are equal iff the states they were taken from agree on
/// side partitions, elapsed time, light holder, and history length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub left: Vec<ActorId>,
    pub right: Vec<ActorId>,
    pub elapsed: u32,
    pub holder: Option<ActorId>,
    pub history_len: usize,
}

/// The authoritative game state. Owns the roster, bridge, and light;
/// maintains the left/right partition, elapsed time, and move history.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    roster: Roster,
    bridge: Bridge,
    light: Light,
    left: Vec<ActorId>,
    right: Vec<ActorId>,
    elapsed: u32,
    history: Vec<Move>,
    won: bool,
    over: bool,
}

impl PuzzleState {
    /// Start a game: everyone on the left bank, the first roster member
    /// holding the light, clock at zero.
    pub fn new(roster: Roster, bridge: Bridge) -> Self {
        let mut state = Self {
            left: roster.ids().collect(),
            right: Vec::new(),
            roster,
            bridge,
            light: Light::new(),
            elapsed: 0,
            history: Vec::new(),
            won: false,
            over: false,
        };
        state.light.transfer_to(&mut state.roster, ActorId(0));
        state
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    pub fn side(&self, side: Side) -> &[ActorId] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn left_side(&self) -> &[ActorId] {
        &self.left
    }

    pub fn right_side(&self) -> &[ActorId] {
        &self.right
    }

    pub fn elapsed_time(&self) -> u32 {
        self.elapsed
    }

    /// Minutes left on the clock, clamped at zero.
    pub fn remaining_time(&self) -> u32 {
        self.bridge.time_limit().saturating_sub(self.elapsed)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn status(&self) -> PuzzleStatus {
        if self.won {
            PuzzleStatus::Won
        } else if self.over {
            PuzzleStatus::Lost
        } else {
            PuzzleStatus::InProgress
        }
    }

    pub fn light_holder(&self) -> Option<ActorId> {
        self.light.current_holder()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Which bank an actor is currently on.
    pub fn side_of(&self, id: ActorId) -> Side {
        if self.left.contains(&id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Full legality check for a candidate move:
    /// the game is still running, the bridge accepts the group, someone
    /// holds the light, the move starts from the light's bank with every
    /// group member (listed once) on that bank, and the crossing fits in
    /// the remaining time (landing exactly on the limit is allowed).
    pub fn can_move(&self, mv: &Move) -> bool {
        if self.over {
            return false;
        }
        if !mv.is_valid(&self.bridge) {
            return false;
        }

        // Invariant says the light is always held, but check anyway.
        let holder = match self.light.current_holder() {
            Some(id) => id,
            None => return false,
        };

        let origin = mv.direction().origin();
        if self.side_of(holder) != origin {
            return false;
        }
        let origin_side = self.side(origin);
        for (i, &id) in mv.group().iter().enumerate() {
            if !origin_side.contains(&id) {
                return false;
            }
            // An actor can only cross once per move.
            if mv.group()[..i].contains(&id) {
                return false;
            }
        }

        self.elapsed + mv.duration(&self.bridge, &self.roster) <= self.bridge.time_limit()
    }

    /// Apply a legal move: walk the group to the opposite bank (arrival
    /// order = group order), hand the light to the first-listed member,
    /// advance the clock, and log the stamped move. Returns false and
    /// mutates nothing if the move is illegal.
    pub fn apply_move(&mut self, mut mv: Move) -> bool {
        if !self.can_move(&mv) {
            return false;
        }

        mv.execute(&self.bridge, &self.roster);

        let origin = mv.direction().origin();
        let leader = mv.group()[0];
        for &id in mv.group() {
            let (from, to) = match origin {
                Side::Left => (&mut self.left, &mut self.right),
                Side::Right => (&mut self.right, &mut self.left),
            };
            let pos = from.iter().position(|&x| x == id).unwrap();
            from.remove(pos);
            to.push(id);
        }

        self.light.transfer_to(&mut self.roster, leader);
        self.elapsed += mv.time_taken();

        self.won = self.right.len() == self.roster.len();
        self.over = self.won || self.elapsed >= self.bridge.time_limit();

        self.history.push(mv);
        true
    }

    /// All legal moves from the light's current bank: every single actor,
    /// then every unordered pair. Groups larger than two are never offered
    /// here even if the bridge capacity allows them; callers can still
    /// submit such moves to `apply_move` directly.
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.over {
            return Vec::new();
        }
        let holder = match self.light.current_holder() {
            Some(id) => id,
            None => return Vec::new(),
        };

        let origin = self.side_of(holder);
        let direction = match origin {
            Side::Left => Direction::Forward,
            Side::Right => Direction::Backward,
        };
        let bank = self.side(origin);

        let mut moves = Vec::new();
        for &id in bank {
            let mv = Move::new([id], direction);
            if self.can_move(&mv) {
                moves.push(mv);
            }
        }
        for (i, &a) in bank.iter().enumerate() {
            for &b in &bank[i + 1..] {
                let mv = Move::new([a, b], direction);
                if self.can_move(&mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Back to the starting position: everyone on the left, clock and
    /// history cleared, bridge repaired, light with the first roster
    /// member. Idempotent.
    pub fn reset(&mut self) {
        self.left = self.roster.ids().collect();
        self.right.clear();
        self.elapsed = 0;
        self.history.clear();
        self.won = false;
        self.over = false;
        self.bridge.repair();
        self.light.transfer_to(&mut self.roster, ActorId(0));
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left: self.left.clone(),
            right: self.right.clone(),
            elapsed: self.elapsed,
            holder: self.light.current_holder(),
            history_len: self.history.len(),
        }
    }

    /// One-line summary for interactive display.
    pub fn describe(&self) -> String {
        let names = |ids: &[ActorId]| -> String {
            ids.iter()
                .map(|&id| self.roster.get(id).name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let holder = self
            .light
            .current_holder()
            .map(|id| self.roster.get(id).name())
            .unwrap_or("nobody");
        format!(
            "Left: [{}] | Right: [{}] | Time: {}/{} | Light: {}",
            names(&self.left),
            names(&self.right),
            self.elapsed,
            self.bridge.time_limit(),
            holder
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Actor;

    const YOU: ActorId = ActorId(0);
    const ASSISTANT: ActorId = ActorId(1);
    const WORKER: ActorId = ActorId(2);
    const SCIENTIST: ActorId = ActorId(3);

    fn classic_state() -> PuzzleState {
        let roster = Roster::new(vec![
            Actor::new("You", 1).unwrap(),
            Actor::new("Lab Assistant", 2).unwrap(),
            Actor::new("Worker", 5).unwrap(),
            Actor::new("Scientist", 10).unwrap(),
        ])
        .unwrap();
        PuzzleState::new(roster, Bridge::new(2, 17).unwrap())
    }

    fn optimal_solution() -> Vec<Move> {
        vec![
            Move::new([YOU, ASSISTANT], Direction::Forward),
            Move::new([YOU], Direction::Backward),
            Move::new([WORKER, SCIENTIST], Direction::Forward),
            Move::new([ASSISTANT], Direction::Backward),
            Move::new([YOU, ASSISTANT], Direction::Forward),
        ]
    }

    fn assert_partition(state: &PuzzleState) {
        let mut all: Vec<ActorId> = state.left_side().to_vec();
        all.extend_from_slice(state.right_side());
        all.sort();
        let expected: Vec<ActorId> = state.roster().ids().collect();
        assert_eq!(all, expected, "sides must partition the roster exactly");
    }

    #[test]
    fn test_initial_state() {
        let state = classic_state();
        assert_eq!(state.left_side().len(), 4);
        assert!(state.right_side().is_empty());
        assert_eq!(state.elapsed_time(), 0);
        assert_eq!(state.remaining_time(), 17);
        assert_eq!(state.light_holder(), Some(YOU));
        assert_eq!(state.status(), PuzzleStatus::InProgress);
        assert_partition(&state);
    }

    #[test]
    fn test_optimal_solution_wins_at_exactly_the_limit() {
        let mut state = classic_state();

        for mv in optimal_solution() {
            assert!(state.can_move(&mv), "move should be legal: {:?}", mv);
            assert!(state.apply_move(mv));
            assert_partition(&state);
        }

        assert_eq!(state.elapsed_time(), 17);
        assert_eq!(state.remaining_time(), 0);
        // Hitting the limit on the winning move is a win, not a loss.
        assert_eq!(state.status(), PuzzleStatus::Won);
        assert!(state.is_won());
        assert!(state.is_over());
        assert_eq!(state.history().len(), 5);
    }

    #[test]
    fn test_light_goes_to_first_listed_actor() {
        let mut state = classic_state();
        assert!(state.apply_move(Move::new([ASSISTANT, YOU], Direction::Forward)));
        assert_eq!(state.light_holder(), Some(ASSISTANT));
        assert!(state.roster().get(ASSISTANT).has_light());
        assert!(!state.roster().get(YOU).has_light());
    }

    #[test]
    fn test_rejects_group_not_on_light_side() {
        let mut state = classic_state();
        assert!(state.apply_move(Move::new([YOU, ASSISTANT], Direction::Forward)));

        // Worker is still on the left; the light is on the right.
        let mv = Move::new([WORKER], Direction::Forward);
        assert!(!state.can_move(&mv));

        // An actor on the right can't keep moving forward either.
        let mv = Move::new([YOU], Direction::Forward);
        assert!(!state.can_move(&mv));
    }

    #[test]
    fn test_rejects_over_capacity_group() {
        let state = classic_state();
        let mv = Move::new([YOU, ASSISTANT, WORKER], Direction::Forward);
        assert!(!state.can_move(&mv));
    }

    #[test]
    fn test_rejects_empty_and_duplicate_groups() {
        let state = classic_state();
        assert!(!state.can_move(&Move::new([], Direction::Forward)));
        assert!(!state.can_move(&Move::new([YOU, YOU], Direction::Forward)));
    }

    #[test]
    fn test_rejects_move_exceeding_time_limit() {
        let roster = Roster::new(vec![
            Actor::new("You", 1).unwrap(),
            Actor::new("Scientist", 10).unwrap(),
        ])
        .unwrap();
        let mut state = PuzzleState::new(roster, Bridge::new(2, 5).unwrap());

        // 10 minutes into a 5-minute budget is out.
        assert!(!state.can_move(&Move::new([ActorId(1)], Direction::Forward)));
        // Exactly on the limit is in.
        let roster = Roster::new(vec![
            Actor::new("You", 1).unwrap(),
            Actor::new("Scientist", 5).unwrap(),
        ])
        .unwrap();
        state = PuzzleState::new(roster, Bridge::new(2, 5).unwrap());
        let mv = Move::new([ActorId(0), ActorId(1)], Direction::Forward);
        assert!(state.can_move(&mv));
        assert!(state.apply_move(mv));
        assert_eq!(state.status(), PuzzleStatus::Won);
    }

    #[test]
    fn test_failed_move_mutates_nothing() {
        let mut state = classic_state();
        let before = state.snapshot();

        // Over capacity, wrong side, and over budget, all rejected.
        assert!(!state.apply_move(Move::new([YOU, ASSISTANT, WORKER], Direction::Forward)));
        assert!(!state.apply_move(Move::new([YOU], Direction::Backward)));
        assert!(!state.apply_move(Move::new([], Direction::Forward)));

        assert_eq!(state.snapshot(), before);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_loss_when_time_runs_out() {
        let roster = Roster::new(vec![
            Actor::new("You", 3).unwrap(),
            Actor::new("Worker", 3).unwrap(),
            Actor::new("Scientist", 3).unwrap(),
        ])
        .unwrap();
        let mut state = PuzzleState::new(roster, Bridge::new(1, 3).unwrap());

        // One forward crossing burns the whole budget with two left behind.
        assert!(state.apply_move(Move::new([ActorId(0)], Direction::Forward)));
        assert_eq!(state.elapsed_time(), 3);
        assert_eq!(state.status(), PuzzleStatus::Lost);
        assert!(state.is_over());
        assert!(!state.is_won());
        assert!(state.valid_moves().is_empty());
    }

    #[test]
    fn test_won_implies_over_but_not_conversely() {
        let mut state = classic_state();
        for mv in optimal_solution() {
            assert!(state.apply_move(mv));
            if state.is_won() {
                assert!(state.is_over());
            }
        }
        assert!(state.is_won() && state.is_over());
    }

    #[test]
    fn test_valid_moves_initial_enumeration() {
        let state = classic_state();
        let moves = state.valid_moves();

        // 4 singles + C(4,2) = 6 pairs, all within the 17-minute budget.
        assert_eq!(moves.len(), 10);
        assert!(moves.iter().all(|m| m.direction() == Direction::Forward));
        assert!(moves.iter().all(|m| state.can_move(m)));

        let singles = moves.iter().filter(|m| m.group().len() == 1).count();
        let pairs = moves.iter().filter(|m| m.group().len() == 2).count();
        assert_eq!((singles, pairs), (4, 6));
    }

    #[test]
    fn test_valid_moves_never_offers_groups_above_two() {
        // Capacity 3, but the enumerator still stops at pairs.
        let roster = Roster::new(vec![
            Actor::new("A", 1).unwrap(),
            Actor::new("B", 2).unwrap(),
            Actor::new("C", 3).unwrap(),
        ])
        .unwrap();
        let state = PuzzleState::new(roster, Bridge::new(3, 100).unwrap());

        assert!(state.valid_moves().iter().all(|m| m.group().len() <= 2));
        // A three-actor move is still legal when submitted directly.
        let mv = Move::new([ActorId(0), ActorId(1), ActorId(2)], Direction::Forward);
        assert!(state.can_move(&mv));
    }

    #[test]
    fn test_terminal_state_has_no_moves() {
        let mut state = classic_state();
        for mv in optimal_solution() {
            assert!(state.apply_move(mv));
        }
        assert!(state.valid_moves().is_empty());
        assert!(!state.can_move(&Move::new([YOU], Direction::Backward)));
    }

    #[test]
    fn test_reset_then_replay_reproduces_final_state() {
        let mut state = classic_state();
        for mv in optimal_solution() {
            assert!(state.apply_move(mv));
        }
        let first_run = state.snapshot();

        state.reset();
        assert_eq!(state.elapsed_time(), 0);
        assert_eq!(state.light_holder(), Some(YOU));
        assert!(state.right_side().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.status(), PuzzleStatus::InProgress);
        assert_partition(&state);

        for mv in optimal_solution() {
            assert!(state.apply_move(mv));
        }
        assert_eq!(state.snapshot(), first_run);
        assert_eq!(state.status(), PuzzleStatus::Won);
    }

    #[test]
    fn test_destroyed_bridge_blocks_all_moves() {
        let mut state = classic_state();
        // Bridge collapse: nothing is legal until reset repairs it.
        state.bridge.destroy();
        assert!(state.valid_moves().is_empty());

        state.reset();
        assert!(state.bridge().is_passable());
        assert_eq!(state.valid_moves().len(), 10);
    }

    #[test]
    fn test_elapsed_time_is_monotonic() {
        let mut state = classic_state();
        let mut last = 0;
        for mv in optimal_solution() {
            assert!(state.apply_move(mv));
            assert!(state.elapsed_time() >= last);
            assert!(state.elapsed_time() <= state.bridge().time_limit());
            last = state.elapsed_time();
        }
    }
}
