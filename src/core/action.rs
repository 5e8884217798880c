//! Move representation: a seat plus a pit position on that seat's side.
//!
//! Positions are 1-based as players count them (1 is the leftmost pit from
//! the mover's view); `PitPosition::index` converts to the 0-based pit index.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::config::PITS_PER_SIDE;
use super::error::GameError;
use super::player::Seat;
use super::state::MoveOutcome;

/// A validated 1-based pit position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitPosition(u8);

impl PitPosition {
    /// Validate a player-facing position (1..=6).
    pub fn new(position: u8) -> Result<Self, GameError> {
        if (1..=PITS_PER_SIDE as u8).contains(&position) {
            Ok(Self(position))
        } else {
            Err(GameError::InvalidPitPosition(position))
        }
    }

    /// Position for a 0-based pit index.
    ///
    /// Panics if `index >= PITS_PER_SIDE`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < PITS_PER_SIDE, "pit index {index} out of range");
        Self(index as u8 + 1)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based pit index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All positions, left to right.
    pub fn all() -> impl Iterator<Item = PitPosition> {
        (0..PITS_PER_SIDE).map(Self::from_index)
    }
}

impl fmt::Display for PitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Legal moves for a seat. At most one per pit, so never spills to the heap.
pub type LegalMoves = SmallVec<[Move; PITS_PER_SIDE]>;

/// A move: sow from `position` on `seat`'s side.
///
/// Parses from text as `"<seat> <position>"`:
///
/// ```
/// use rust_mancala::core::{Move, PitPosition, Seat};
///
/// let mv: Move = "2 5".parse().unwrap();
/// assert_eq!(mv.seat, Seat::Two);
/// assert_eq!(mv.position, PitPosition::new(5).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub seat: Seat,
    pub position: PitPosition,
}

impl Move {
    #[must_use]
    pub fn new(seat: Seat, position: PitPosition) -> Self {
        Self { seat, position }
    }

    /// Validate raw player number and pit position.
    pub fn from_numbers(player_number: u8, pit_position: u8) -> Result<Self, GameError> {
        Ok(Self {
            seat: Seat::try_from(player_number)?,
            position: PitPosition::new(pit_position)?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pit {}", self.seat, self.position)
    }
}

/// Errors from parsing a move typed as text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("expected \"<player> <pit>\", got {0:?}")]
    Malformed(String),
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error(transparent)]
    Invalid(#[from] GameError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(seat), Some(position), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseMoveError::Malformed(s.to_string()));
        };

        let number = |raw: &str| {
            raw.parse::<u8>()
                .map_err(|_| ParseMoveError::NotANumber(raw.to_string()))
        };

        Ok(Move::from_numbers(number(seat)?, number(position)?)?)
    }
}

/// An accepted move with its result, for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move played.
    pub mv: Move,

    /// How the move finished.
    pub outcome: MoveOutcome,

    /// Seeds picked up from the chosen pit.
    pub seeds_sown: u32,

    /// Sequence number (starts at 1).
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(mv: Move, outcome: MoveOutcome, seeds_sown: u32, sequence: u32) -> Self {
        Self {
            mv,
            outcome,
            seeds_sown,
            sequence,
        }
    }
}
