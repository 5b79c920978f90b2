//! Конфигурация партии: имена игроков и число раундов.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::errors::EngineError;
use crate::engine::validation::validate_config;

/// Ошибка загрузки конфига из JSON.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] EngineError),
}

/// Параметры, с которыми стартует партия.
///
/// Пример JSON:
/// ```json
/// { "player_names": ["Alice", "Bob", "Carol"], "rounds": 4 }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// 2–4 непустых имени. Уникальность не проверяется.
    pub player_names: Vec<String>,
    /// 2–7 полных кругов.
    pub rounds: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: vec!["Player 1".to_string(), "Player 2".to_string()],
            rounds: 2,
        }
    }
}

impl GameConfig {
    pub fn new<S: Into<String>>(player_names: impl IntoIterator<Item = S>, rounds: u8) -> Self {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            rounds,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_config(self)
    }

    /// Разобрать и сразу проверить.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
