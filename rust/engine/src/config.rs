use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_STACK;

/// Most seats a table supports; 8 players use at most 24 cards per hand.
pub const MAX_SEATS: usize = 8;

/// Stakes and limits for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    pub max_players: usize,
    /// Consecutive illegal answers tolerated before a player is folded
    pub max_reprompts: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            starting_stack: STARTING_STACK,
            max_players: MAX_SEATS,
            max_reprompts: 16,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind == 0 {
            return Err(GameError::InvalidConfig("big blind must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidConfig(
                "small blind cannot exceed big blind".into(),
            ));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting stack must be positive".into(),
            ));
        }
        if !(2..=MAX_SEATS).contains(&self.max_players) {
            return Err(GameError::InvalidConfig(format!(
                "max players must be between 2 and {}",
                MAX_SEATS
            )));
        }
        if self.max_reprompts == 0 {
            return Err(GameError::InvalidConfig(
                "max reprompts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_blinds_are_rejected() {
        let cfg = TableConfig {
            small_blind: 50,
            big_blind: 20,
            ..TableConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn seat_limit_is_enforced() {
        let cfg = TableConfig {
            max_players: 9,
            ..TableConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
