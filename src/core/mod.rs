//! Core engine types: seats, sides, moves, snapshots, RNG, configuration.
//!
//! Everything here is rules-agnostic plumbing; the sowing rules that tie it
//! together live in `games::kalah`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod action;
pub mod state;

pub use config::{ConfigError, PlayConfig, PITS_PER_SIDE, SNAPSHOT_LEN, STARTING_SEEDS, TOTAL_SEEDS};
pub use error::GameError;
pub use player::{Distribution, Player, Seat, SeatMap, SowStatus};
pub use rng::{GameRng, GameRngState};
pub use action::{LegalMoves, Move, MoveRecord, ParseMoveError, PitPosition};
pub use state::{BoardSnapshot, Capture, MoveOutcome, MoveReport};
