//! Rules engine trait and game results.
//!
//! Games implement `RulesEngine` to define:
//! - What moves are legal
//! - How a move changes the board
//! - When the game is over and who won

use std::fmt;

use tracing::debug;

use crate::core::action::{LegalMoves, Move};
use crate::core::error::GameError;
use crate::core::player::Seat;
use crate::core::rng::GameRng;
use crate::core::state::MoveReport;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }
}

/// Where a session stands, as reported to players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Standing {
    NotStarted,
    NotEnded,
    Winner { seat: Seat, name: String },
    Tie,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standing::NotStarted => write!(f, "Game has not started"),
            Standing::NotEnded => write!(f, "Game has not ended"),
            Standing::Winner { seat, name } => {
                write!(f, "Winner is player {}: {}", seat.number(), name)
            }
            Standing::Tie => write!(f, "It's a tie"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: empty when the seat cannot act
/// - `apply_move`: must reject without mutating on error
/// - `to_move`: `None` once the game is over or before it starts
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Legal moves for a seat.
    fn legal_moves(&self, seat: Seat) -> LegalMoves;

    /// Apply a move.
    fn apply_move(&mut self, mv: Move) -> Result<MoveReport, GameError>;

    /// Seat expected to move next.
    fn to_move(&self) -> Option<Seat>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Play uniformly random legal moves until the game ends or no seat can
    /// move. Returns the report of every move played.
    fn playout(&mut self, rng: &mut GameRng) -> Result<Vec<MoveReport>, GameError> {
        let mut reports = Vec::new();

        while self.is_terminal().is_none() {
            let Some(seat) = self.to_move() else {
                break;
            };
            let legal = self.legal_moves(seat);
            let Some(&mv) = rng.choose(&legal) else {
                debug!(%seat, "no legal moves, stopping playout");
                break;
            };
            reports.push(self.apply_move(mv)?);
        }

        Ok(reports)
    }
}
