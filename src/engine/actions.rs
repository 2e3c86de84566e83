use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Первая ставка на улице (когда доплачивать нечего).
    Bet,
    /// Повышение поверх того, что нужно доплатить.
    Raise,
    /// Поставить весь стек.
    AllIn,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "all-in",
        };
        f.write_str(s)
    }
}

/// Действие активного игрока. `chips` имеет смысл только для Bet/Raise:
/// это прибавка сверх суммы, которую нужно доплатить до колла.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    #[serde(default)]
    pub chips: Chips,
}

impl Action {
    pub fn fold() -> Self {
        Self::of(ActionKind::Fold)
    }

    pub fn check() -> Self {
        Self::of(ActionKind::Check)
    }

    pub fn call() -> Self {
        Self::of(ActionKind::Call)
    }

    pub fn bet(chips: u64) -> Self {
        Self {
            kind: ActionKind::Bet,
            chips: Chips(chips),
        }
    }

    pub fn raise(chips: u64) -> Self {
        Self {
            kind: ActionKind::Raise,
            chips: Chips(chips),
        }
    }

    pub fn all_in() -> Self {
        Self::of(ActionKind::AllIn)
    }

    fn of(kind: ActionKind) -> Self {
        Self {
            kind,
            chips: Chips::ZERO,
        }
    }
}
