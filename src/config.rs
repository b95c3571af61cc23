//! Match configuration.

use thiserror::Error;

use crate::constants::{DEFAULT_SIZE, DEFAULT_TIMES, MOVE_CAP_FACTOR};
use crate::policy::PolicyKind;

/// Setup errors. Fatal to the match being configured, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroSize,
    #[error("at least one match must be played")]
    ZeroTimes,
    #[error("move cap must be at least 1")]
    ZeroMoveCap,
    #[error("unknown player type '{0}', options: manual, random, greedy, my")]
    UnknownPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Board is `size` x `size`.
    pub size: usize,
    pub black: PolicyKind,
    pub white: PolicyKind,
    /// Matches in a series.
    pub times: usize,
    /// Turn limit per match; `None` means `MOVE_CAP_FACTOR * size * size`.
    pub max_moves: Option<usize>,
    /// Seed for every random player; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            black: PolicyKind::Random,
            white: PolicyKind::Random,
            times: DEFAULT_TIMES,
            max_moves: None,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.times == 0 {
            return Err(ConfigError::ZeroTimes);
        }
        if self.max_moves == Some(0) {
            return Err(ConfigError::ZeroMoveCap);
        }
        Ok(())
    }

    /// Effective turn limit.
    pub fn move_cap(&self) -> usize {
        self.max_moves.unwrap_or(MOVE_CAP_FACTOR * self.size * self.size)
    }

    /// Random source the players' generators are forked from.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MatchConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.move_cap(), 75);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let config = MatchConfig {
            size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSize));

        let config = MatchConfig {
            times: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimes));

        let config = MatchConfig {
            max_moves: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMoveCap));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = MatchConfig {
            seed: Some(9),
            ..Default::default()
        };
        assert_eq!(config.rng().u64(..), config.rng().u64(..));
    }
}
