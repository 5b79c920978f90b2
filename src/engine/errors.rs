use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Какой индекс вышел за границы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum IndexKind {
    Hand,
    Middle,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Hand => write!(f, "карты в руке"),
            IndexKind::Middle => write!(f, "карты в общем ряду"),
        }
    }
}

/// Класс ошибки для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    /// Неверная конфигурация партии.
    InvalidConfig,
    /// Действие не в свою фазу хода (или партии нет).
    IllegalState,
    /// Индекс вне [0, 2].
    OutOfRange,
}

/// Ошибки движка Shift Poker.
///
/// Любая ошибка возвращается ДО мутации: состояние партии остаётся прежним.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимое число игроков: {0} (нужно от 2 до 4)")]
    InvalidPlayerCount(usize),

    #[error("Недопустимое число раундов: {0} (нужно от 2 до 7)")]
    InvalidRounds(u8),

    #[error("Пустое имя игрока на позиции {0}")]
    InvalidPlayerName(usize),

    #[error("Партия не начата или уже завершена")]
    NoActiveGame,

    #[error("Игрок уже сдвигал ряд в этом ходу")]
    AlreadyShifted,

    #[error("Сначала нужно сдвинуть ряд")]
    NotShifted,

    #[error("Индекс {kind} вне диапазона: {index}")]
    IndexOutOfRange { kind: IndexKind, index: usize },

    #[error("Добор пуст")]
    DrawPileEmpty,

    #[error("Для оценки нужно ровно 5 карт, получено {0}")]
    InvalidHandSize(usize),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidPlayerCount(_)
            | EngineError::InvalidRounds(_)
            | EngineError::InvalidPlayerName(_)
            | EngineError::InvalidHandSize(_) => ErrorKind::InvalidConfig,
            EngineError::NoActiveGame
            | EngineError::AlreadyShifted
            | EngineError::NotShifted
            | EngineError::DrawPileEmpty => ErrorKind::IllegalState,
            EngineError::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
