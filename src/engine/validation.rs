use crate::config::GameConfig;
use crate::domain::game::ShiftPokerGame;
use crate::domain::{MAX_PLAYERS, MAX_ROUNDS, MIDDLE_CARDS, MIN_PLAYERS, MIN_ROUNDS, OPEN_CARDS};
use crate::engine::errors::{EngineError, IndexKind};

/// Проверка конфигурации перед стартом партии.
pub fn validate_config(config: &GameConfig) -> Result<(), EngineError> {
    let count = config.player_names.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(EngineError::InvalidPlayerCount(count));
    }
    if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&config.rounds) {
        return Err(EngineError::InvalidRounds(config.rounds));
    }
    if let Some(pos) = config.player_names.iter().position(|n| n.trim().is_empty()) {
        return Err(EngineError::InvalidPlayerName(pos));
    }
    Ok(())
}

pub fn validate_hand_index(index: usize) -> Result<(), EngineError> {
    if index < OPEN_CARDS {
        Ok(())
    } else {
        Err(EngineError::IndexOutOfRange {
            kind: IndexKind::Hand,
            index,
        })
    }
}

pub fn validate_middle_index(index: usize) -> Result<(), EngineError> {
    if index < MIDDLE_CARDS {
        Ok(())
    } else {
        Err(EngineError::IndexOutOfRange {
            kind: IndexKind::Middle,
            index,
        })
    }
}

/// Текущий игрок ещё не сдвигал ряд.
pub fn require_not_shifted(game: &ShiftPokerGame) -> Result<(), EngineError> {
    if game.current().has_shifted {
        Err(EngineError::AlreadyShifted)
    } else {
        Ok(())
    }
}

/// Текущий игрок уже сдвинул ряд: можно менять карты или пасовать.
pub fn require_shifted(game: &ShiftPokerGame) -> Result<(), EngineError> {
    if game.current().has_shifted {
        Ok(())
    } else {
        Err(EngineError::NotShifted)
    }
}
