//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each position
//! - How moves modify the board
//! - Win/loss conditions
//!
//! Drivers and playouts only talk to games through this trait.

pub mod engine;

pub use engine::{GameResult, RulesEngine, Standing};
