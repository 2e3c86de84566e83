use crate::domain::chips::Chips;
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::TableError;

/// Допустимые действия при долге `owed` и стеке `stack`.
///
/// - долга нет → fold / check / bet / all-in;
/// - долг больше стека → только fold / call (call сам превратится в all-in);
/// - иначе → fold / call / raise / all-in.
pub fn legal_actions(owed: Chips, stack: Chips) -> Vec<ActionKind> {
    if owed.is_zero() {
        vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet, ActionKind::AllIn]
    } else if owed > stack {
        vec![ActionKind::Fold, ActionKind::Call]
    } else {
        vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise, ActionKind::AllIn]
    }
}

/// Проверка действия до любых изменений стола.
pub fn validate_action(
    action: &Action,
    owed: Chips,
    stack: Chips,
    big_blind: Chips,
) -> Result<(), TableError> {
    if !legal_actions(owed, stack).contains(&action.kind) {
        return Err(TableError::IllegalAction(action.kind));
    }

    // TODO: размер ставки по лимиту (pot-limit потолок, минимальный рейз no-limit).
    if matches!(action.kind, ActionKind::Bet | ActionKind::Raise) && action.chips < big_blind {
        return Err(TableError::BelowMinimumBet {
            chips: action.chips,
            big_blind,
        });
    }

    Ok(())
}
