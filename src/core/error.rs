//! Errors surfaced to callers of the game session.
//!
//! These are expected conditions (bad input, wrong lifecycle phase), returned
//! as values. Internal index violations are engine defects and panic instead.

use thiserror::Error;

/// A rejected session operation. Rejection never mutates the game.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Game has not started!")]
    GameNotStarted,
    #[error("Invalid player number: {0}")]
    InvalidPlayerNumber(u8),
    #[error("Invalid number for pit position: {0}")]
    InvalidPitPosition(u8),
    #[error("Game has ended!")]
    GameAlreadyEnded,
    #[error("Player list full. No new players can be created")]
    PlayerSlotsFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(GameError::GameNotStarted.to_string(), "Game has not started!");
        assert_eq!(
            GameError::InvalidPitPosition(7).to_string(),
            "Invalid number for pit position: 7"
        );
        assert_eq!(
            GameError::InvalidPlayerNumber(3).to_string(),
            "Invalid player number: 3"
        );
    }
}
