//! Board constants and driver configuration.
//!
//! The rules are fixed: six pits and a store per side, four seeds per pit.
//! `PlayConfig` only configures how a session is driven (names, seeding,
//! logging), never the rules themselves.

use thiserror::Error;

/// Number of pits on each side, not counting the store.
pub const PITS_PER_SIDE: usize = 6;

/// Seeds placed in every pit at the start of a game.
pub const STARTING_SEEDS: u32 = 4;

/// Seeds in play for the whole game.
pub const TOTAL_SEEDS: u32 = 2 * PITS_PER_SIDE as u32 * STARTING_SEEDS;

/// Length of a board snapshot: both sides' pits plus both stores.
pub const SNAPSHOT_LEN: usize = 2 * (PITS_PER_SIDE + 1);

/// Errors from parsing driver arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

/// Settings for a play session.
///
/// ```
/// use rust_mancala::core::PlayConfig;
///
/// let config = PlayConfig::new()
///     .with_names("Lily", "Lucy")
///     .with_seed(7)
///     .autoplay();
///
/// assert_eq!(config.names[1], "Lucy");
/// assert_eq!(config.seed, 7);
/// assert!(config.autoplay);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayConfig {
    /// Names for seat 1 and seat 2.
    pub names: [String; 2],

    /// Seed for the random playout.
    pub seed: u64,

    /// Play random legal moves instead of reading them from stdin.
    pub autoplay: bool,

    /// Log at debug level instead of info.
    pub verbose: bool,

    /// Emit logs as JSON lines.
    pub json_logs: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            names: ["Player 1".to_string(), "Player 2".to_string()],
            seed: 42,
            autoplay: false,
            verbose: false,
            json_logs: false,
        }
    }
}

impl PlayConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both player names.
    #[must_use]
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    /// Set the playout seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable random autoplay.
    #[must_use]
    pub fn autoplay(mut self) -> Self {
        self.autoplay = true;
        self
    }

    /// Enable debug-level logging.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Parse command-line arguments (without the program name).
    ///
    /// Recognised: `--names A B`, `--seed N`, `--auto`, `--verbose`, `--json`.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--names" => {
                    let first = args.next().ok_or(ConfigError::MissingValue("--names"))?;
                    let second = args.next().ok_or(ConfigError::MissingValue("--names"))?;
                    config.names = [first, second];
                }
                "--seed" => {
                    let raw = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    config.seed = raw.parse().map_err(|_| ConfigError::InvalidSeed(raw))?;
                }
                "--auto" => config.autoplay = true,
                "--verbose" => config.verbose = true,
                "--json" => config.json_logs = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_constants() {
        assert_eq!(TOTAL_SEEDS, 48);
        assert_eq!(SNAPSHOT_LEN, 14);
    }

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(config.names[0], "Player 1");
        assert!(!config.autoplay);
        assert!(!config.verbose);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_from_args() {
        let config =
            PlayConfig::from_args(args(&["--names", "Lily", "Lucy", "--seed", "9", "--auto", "--json"]))
                .unwrap();

        assert_eq!(config.names, ["Lily".to_string(), "Lucy".to_string()]);
        assert_eq!(config.seed, 9);
        assert!(config.autoplay);
        assert!(config.json_logs);
        assert!(!config.verbose);
    }

    #[test]
    fn test_from_args_errors() {
        assert_eq!(
            PlayConfig::from_args(args(&["--seed"])),
            Err(ConfigError::MissingValue("--seed"))
        );
        assert_eq!(
            PlayConfig::from_args(args(&["--seed", "x"])),
            Err(ConfigError::InvalidSeed("x".to_string()))
        );
        assert_eq!(
            PlayConfig::from_args(args(&["--names", "Lily"])),
            Err(ConfigError::MissingValue("--names"))
        );
        assert_eq!(
            PlayConfig::from_args(args(&["--fast"])),
            Err(ConfigError::UnknownArgument("--fast".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::InvalidSeed("x".to_string()).to_string(),
            "invalid seed: x"
        );
    }
}
