use serde::{Deserialize, Serialize};

use crate::domain::{Player, SeatIndex};
use crate::engine::ActionKind;

pub use crate::engine::TableState;

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Обновлённое состояние стола (после действия или новой раздачи).
    TableState(Box<TableState>),

    /// Игрок посажен на место.
    PlayerSeated { seat: SeatIndex },

    /// Игрок ушёл из-за стола со своим стеком.
    PlayerRemoved(Player),
}

/// Ответ на запрос "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(Box<TableState>),
    LegalActions(Vec<ActionKind>),
    Seats(Vec<Player>),
}
