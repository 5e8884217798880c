//! # rust-mancala
//!
//! A rules engine for two-player Mancala (Kalah variant).
//!
//! ## Rules
//!
//! Each seat owns six pits and a store; every pit starts with four seeds.
//! A move empties one of the mover's pits and sows its seeds one at a time
//! rightward: the mover's remaining pits, the mover's store, then the
//! opponent's pits, around again as needed.
//!
//! - **Bonus turn**: the last seed lands in the mover's store.
//! - **Capture**: the last seed would land in an empty pit of the mover; it
//!   and the mirrored opponent pit go straight to the mover's store.
//! - **Game end**: a move leaves the mover's pits empty. The opponent's
//!   remaining seeds go to the opponent's store; the larger store wins.
//!
//! ## Modules
//!
//! - `core`: Seats, per-side state, moves, snapshots, errors, RNG, configuration
//! - `rules`: `RulesEngine` trait, results and random playouts
//! - `games`: The Kalah session
//!
//! ## Example
//!
//! ```
//! use rust_mancala::{Game, MoveOutcome};
//!
//! let mut game = Game::new();
//! game.create_player("Lily").unwrap();
//! game.create_player("Lucy").unwrap();
//!
//! let report = game.make_move(1, 3).unwrap();
//! assert_eq!(report.outcome, MoveOutcome::BonusTurn);
//! assert_eq!(report.board.as_slice(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
//! ```

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap, Player,
    GameRng, GameRngState,
    PlayConfig, ConfigError, GameError,
    Move, MoveRecord, PitPosition, ParseMoveError, LegalMoves,
    BoardSnapshot, Capture, MoveOutcome, MoveReport,
    PITS_PER_SIDE, STARTING_SEEDS, TOTAL_SEEDS,
};

pub use crate::rules::{GameResult, RulesEngine, Standing};

pub use crate::games::kalah::Game;
