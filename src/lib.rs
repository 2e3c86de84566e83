//! Движок одного покерного стола.
//!
//! Стол принимает действия игроков по очереди, сам открывает улицы, делит банк
//! на сайд-поты и рассчитывает шоудаун. Колода (`Dealer`) и оценка рук
//! (`HandEvaluator`) подключаются снаружи, события уходят в `TableObserver`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Chips, PlayerId, SeatIndex, TableOptions, TableStatus};
pub use engine::{Action, ActionKind, Table, TableError, TableState};
