//! Движок стола: очередь ходов, переход улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `Table`
//! Основные операции:
//!   - `act` – применить действие активного игрока
//!   - `new_round` – начать новую раздачу вручную
//!   - `state` – снэпшот стола

pub mod actions;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod payout;
pub mod positions;
pub mod side_pots;
pub mod state;
pub mod validation;

pub use actions::{Action, ActionKind};
pub use errors::TableError;
pub use events::{HandEvent, HandHistory, LogObserver, TableEvent, TableObserver};
pub use game_loop::Table;
pub use payout::{settle_pots, split_pot, PotSettlement};
pub use side_pots::{compute_side_pots, Contribution, SidePot};
pub use state::TableState;
pub use validation::{legal_actions, validate_action};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
