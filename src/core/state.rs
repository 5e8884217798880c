//! Observable results of play: board snapshots and move reports.
//!
//! ## BoardSnapshot
//!
//! The whole board as 14 integers, in the order
//! `[seat 1 pits x6, seat 1 store, seat 2 pits x6, seat 2 store]`.
//!
//! ## MoveReport
//!
//! What a completed move did: its outcome (turn passes, bonus turn, game
//! over), any capture, and the board immediately afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::{Move, PitPosition};
use super::config::{PITS_PER_SIDE, SNAPSHOT_LEN};
use super::player::{Player, Seat};

/// Seed counts for the whole board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot(pub [u32; SNAPSHOT_LEN]);

impl BoardSnapshot {
    /// Capture both sides of the board.
    #[must_use]
    pub fn capture(first: &Player, second: &Player) -> Self {
        let mut seeds = [0; SNAPSHOT_LEN];
        for (side, player) in [first, second].into_iter().enumerate() {
            let offset = side * (PITS_PER_SIDE + 1);
            seeds[offset..offset + PITS_PER_SIDE].copy_from_slice(player.pits());
            seeds[offset + PITS_PER_SIDE] = player.store();
        }
        Self(seeds)
    }

    fn offset(seat: Seat) -> usize {
        seat.index() * (PITS_PER_SIDE + 1)
    }

    /// Pits of one seat, left to right from that seat's view.
    #[must_use]
    pub fn pits(&self, seat: Seat) -> &[u32] {
        let offset = Self::offset(seat);
        &self.0[offset..offset + PITS_PER_SIDE]
    }

    #[must_use]
    pub fn store(&self, seat: Seat) -> u32 {
        self.0[Self::offset(seat) + PITS_PER_SIDE]
    }

    /// Every seed on the board, stores included.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// How a move finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The other seat is expected to move next.
    TurnPasses,
    /// The last seed landed in the mover's store; the mover goes again.
    BonusTurn,
    /// The mover's pits are empty; the game is over.
    GameOver,
}

/// Seeds taken by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The mover's empty pit the last seed was bound for.
    pub pit: PitPosition,
    /// Seeds taken from the mirrored opponent pit.
    pub captured: u32,
}

impl Capture {
    /// Seeds banked by the capture, the capturing seed included.
    #[must_use]
    pub fn banked(&self) -> u32 {
        self.captured + 1
    }
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub mv: Move,
    pub outcome: MoveOutcome,
    pub capture: Option<Capture>,
    /// Seeds picked up from the chosen pit.
    pub seeds_sown: u32,
    /// Board after the move, including any end-of-game sweep.
    pub board: BoardSnapshot,
}

impl MoveReport {
    /// Seat expected to move next, `None` once the game is over.
    #[must_use]
    pub fn next_seat(&self) -> Option<Seat> {
        match self.outcome {
            MoveOutcome::TurnPasses => Some(self.mv.seat.other()),
            MoveOutcome::BonusTurn => Some(self.mv.seat),
            MoveOutcome::GameOver => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_layout() {
        let first = Player::new("Lily", Seat::One);
        let mut second = Player::new("Lucy", Seat::Two);
        second.empty_pit(0);
        second.add_to_store(4);

        let snapshot = BoardSnapshot::capture(&first, &second);

        assert_eq!(
            snapshot.as_slice(),
            &[4, 4, 4, 4, 4, 4, 0, 0, 4, 4, 4, 4, 4, 4]
        );
        assert_eq!(snapshot.pits(Seat::Two), &[0, 4, 4, 4, 4, 4]);
        assert_eq!(snapshot.store(Seat::One), 0);
        assert_eq!(snapshot.store(Seat::Two), 4);
        assert_eq!(snapshot.total(), 48);
    }

    #[test]
    fn test_next_seat() {
        let mv = Move::from_numbers(2, 1).unwrap();
        let board = BoardSnapshot([0; SNAPSHOT_LEN]);
        let mut report = MoveReport {
            mv,
            outcome: MoveOutcome::TurnPasses,
            capture: None,
            seeds_sown: 4,
            board,
        };
        assert_eq!(report.next_seat(), Some(Seat::One));

        report.outcome = MoveOutcome::BonusTurn;
        assert_eq!(report.next_seat(), Some(Seat::Two));

        report.outcome = MoveOutcome::GameOver;
        assert_eq!(report.next_seat(), None);
    }

    #[test]
    fn test_capture_banked() {
        let capture = Capture {
            pit: PitPosition::new(2).unwrap(),
            captured: 7,
        };
        assert_eq!(capture.banked(), 8);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = BoardSnapshot([4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, "[4,4,0,5,5,5,1,4,4,4,4,4,4,0]");
        let deserialized: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
