use serde::{Deserialize, Serialize};

use crate::domain::{ConfigError, PlayerId};
use crate::engine::TableError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON или конфиг стола).
    BadRequest(String),

    /// Игрок не найден за столом.
    PlayerNotAtTable(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка (ставки, действия).
    EngineError(String),
}

impl From<TableError> for ApiError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::PlayerNotFound(id) => ApiError::PlayerNotAtTable(id),
            TableError::PlayerAlreadySeated(_) | TableError::PlayerInHand(_) => {
                ApiError::InvalidCommand(err.to_string())
            }
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
