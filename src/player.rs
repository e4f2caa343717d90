//! # Player Identity
//!
//! Name-and-mark holders consumed by the presentation layer. The rules
//! engine only ever sees [`Mark`]s; pairing two players and keeping their
//! marks distinct happens here, at setup time.

use crate::board::Mark;
use thiserror::Error;

/// Setup-time configuration failure, fatal and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Both players were given the same mark.
    #[error("both players use the {0} mark")]
    DuplicateMark(Mark),
}

/// A named participant holding one of the two marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Player {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// The two participants of a session, with distinct marks guaranteed
#[derive(Debug, Clone)]
pub struct PlayerPair {
    first: Player,
    second: Player,
}

impl PlayerPair {
    /// Pairs two players, rejecting a duplicate mark assignment
    pub fn new(first: Player, second: Player) -> Result<Self, ConfigError> {
        if first.mark() == second.mark() {
            return Err(ConfigError::DuplicateMark(first.mark()));
        }
        Ok(PlayerPair { first, second })
    }

    /// The player who opens the game
    pub fn first(&self) -> &Player {
        &self.first
    }

    pub fn second(&self) -> &Player {
        &self.second
    }

    /// The player holding the given mark
    pub fn by_mark(&self, mark: Mark) -> &Player {
        if self.first.mark() == mark {
            &self.first
        } else {
            &self.second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_with_distinct_marks() {
        let pair = PlayerPair::new(
            Player::new("Ada", Mark::Red),
            Player::new("Grace", Mark::Yellow),
        )
        .unwrap();

        assert_eq!(pair.first().name(), "Ada");
        assert_eq!(pair.second().mark(), Mark::Yellow);
    }

    #[test]
    fn test_duplicate_marks_are_rejected() {
        let result = PlayerPair::new(
            Player::new("Ada", Mark::Red),
            Player::new("Grace", Mark::Red),
        );
        assert_eq!(result.unwrap_err(), ConfigError::DuplicateMark(Mark::Red));
    }

    #[test]
    fn test_lookup_by_mark() {
        let pair = PlayerPair::new(
            Player::new("Ada", Mark::Red),
            Player::new("Grace", Mark::Yellow),
        )
        .unwrap();

        assert_eq!(pair.by_mark(Mark::Yellow).name(), "Grace");
        assert_eq!(pair.by_mark(Mark::Red).name(), "Ada");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DuplicateMark(Mark::Red);
        assert_eq!(err.to_string(), "both players use the red mark");
    }
}
