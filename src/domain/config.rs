//! Правила партии, которые хост может настроить.
//!
//! Конфиг хранится внутри `GameState`, поэтому снапшот партии самодостаточен,
//! а рестарт идёт по тем же правилам.

use serde::{Deserialize, Serialize};

use crate::domain::deck::DECK_SIZE;
use crate::engine::errors::EngineError;
use crate::engine::positions::PLAYER_COUNT;
use crate::time_ctrl::TimeRules;

/// Сколько разных цветов радуги вообще существует.
pub const RAINBOW_COLORS: usize = 7;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Размер полной руки.
    pub hand_size: usize,
    /// Сколько карт можно сыграть за один ход.
    pub max_plays_per_turn: usize,
    /// Сколько разных цветов радуги нужно открыть в ряду для победы в раунде.
    pub rainbow_target: usize,
    pub time: TimeRules,
}

impl GameConfig {
    pub const fn standard() -> Self {
        Self {
            hand_size: 3,
            max_plays_per_turn: 3,
            rainbow_target: 6,
            time: TimeRules::standard(),
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.hand_size == 0 {
            return Err(EngineError::InvalidConfig("hand_size должен быть > 0"));
        }
        if self.hand_size * PLAYER_COUNT > DECK_SIZE {
            return Err(EngineError::InvalidConfig("колоды не хватит на стартовую раздачу"));
        }
        if self.max_plays_per_turn == 0 {
            return Err(EngineError::InvalidConfig("max_plays_per_turn должен быть > 0"));
        }
        if self.rainbow_target == 0 || self.rainbow_target > RAINBOW_COLORS {
            return Err(EngineError::InvalidConfig(
                "rainbow_target должен быть в диапазоне 1..=7",
            ));
        }
        if self.time.turn_secs == 0 {
            return Err(EngineError::InvalidConfig("turn_secs должен быть > 0"));
        }
        Ok(())
    }

    /// Загрузить конфиг из JSON хоста. Отсутствующие поля берутся из `standard()`.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_standard() {
        let cfg = GameConfig::from_json_str(r#"{ "rainbowTarget": 5 }"#).unwrap();
        assert_eq!(cfg.rainbow_target, 5);
        assert_eq!(cfg.hand_size, 3);
        assert_eq!(cfg.time.turn_secs, 60);
    }

    #[test]
    fn rejects_impossible_rainbow() {
        for json in [r#"{ "rainbowTarget": 8 }"#, r#"{ "rainbowTarget": 0 }"#] {
            let err = GameConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfig(_)));
        }
    }

    #[test]
    fn full_rainbow_is_a_valid_target() {
        let cfg = GameConfig::from_json_str(r#"{ "rainbowTarget": 7 }"#).unwrap();
        assert_eq!(cfg.rainbow_target, RAINBOW_COLORS);
    }
}
