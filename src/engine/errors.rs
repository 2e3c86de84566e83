use thiserror::Error;

use crate::domain::{Chips, PlayerId};
use crate::engine::actions::ActionKind;

/// Ошибки движка стола. Все восстановимые: при ошибке состояние стола не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Недопустимое действие: {0}")]
    IllegalAction(ActionKind),

    #[error("Ставка или рейз {chips} меньше большого блайнда {big_blind}")]
    BelowMinimumBet { chips: Chips, big_blind: Chips },

    #[error("Игрок {0} не найден за столом")]
    PlayerNotFound(PlayerId),

    #[error("Игрок {0} уже сидит за столом")]
    PlayerAlreadySeated(PlayerId),

    #[error("Игрок {0} участвует в текущей раздаче")]
    PlayerInHand(PlayerId),

    #[error("Сейчас никто не должен ходить")]
    NoActivePlayer,
}
