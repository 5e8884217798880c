//! Kalah, the common Mancala variant.
//!
//! - Two seats, six pits each plus a store, four seeds per pit
//! - Sow rightward through your pits, your store, then the opponent's pits
//!   (never the opponent's store)
//! - Last seed in your store: bonus turn
//! - Last seed bound for an empty pit of yours: it and the mirrored
//!   opponent pit go to your store
//! - A move that empties your pits ends the game; the opponent banks the rest

mod game;

pub use game::Game;
