use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, ErrorKind};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битая команда).
    BadRequest(String),

    /// Неверная конфигурация партии.
    InvalidConfig(String),

    /// Команда не может быть выполнена в текущей фазе хода.
    InvalidCommand(String),

    /// Индекс карты вне диапазона.
    OutOfRange(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err.kind() {
            ErrorKind::InvalidConfig => ApiError::InvalidConfig(msg),
            ErrorKind::IllegalState => ApiError::InvalidCommand(msg),
            ErrorKind::OutOfRange => ApiError::OutOfRange(msg),
        }
    }
}
