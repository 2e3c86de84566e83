use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, PlayerId, Round, SeatIndex, TableStatus};
use crate::engine::actions::Action;

/// Событие за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableEvent {
    /// Новая раздача: кнопка и блайнды определены.
    HandStarted {
        button: SeatIndex,
        small_blind: SeatIndex,
        big_blind: SeatIndex,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt {
        player_id: PlayerId,
        cards: Vec<Card>,
    },

    /// Анте и блайнды собраны (реально внесённые суммы).
    BlindsPosted {
        antes: Vec<(PlayerId, Chips)>,
        small_blind: (PlayerId, Chips),
        big_blind: (PlayerId, Chips),
    },

    /// Открыты общие карты; `board` – весь борд после открытия.
    BoardDealt { round: Round, board: Vec<Card> },

    /// Действие игрока прошло валидацию и применено.
    ActionTaken {
        player_id: PlayerId,
        seat: SeatIndex,
        action: Action,
        /// Действие сделал стол за defaulting-игрока.
        automatic: bool,
        stack_after: Chips,
        pot_after: Chips,
    },

    /// Выплата из пота.
    PotAwarded {
        player_id: PlayerId,
        seat: SeatIndex,
        amount: Chips,
    },

    /// Раздача рассчитана.
    HandFinished { winners: Vec<PlayerId>, pot: Chips },

    /// Стол сменил статус (Broken / Done / снова Dealing).
    StatusChanged { status: TableStatus },
}

/// Получатель событий стола. Вызывается синхронно, после каждого изменения.
pub trait TableObserver {
    fn on_event(&mut self, event: &TableEvent);
}

/// Наблюдатель по умолчанию: пишет события в `log`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl TableObserver for LogObserver {
    fn on_event(&mut self, event: &TableEvent) {
        match event {
            TableEvent::HandStarted {
                button,
                small_blind,
                big_blind,
            } => log::info!("new hand: button={button} sb={small_blind} bb={big_blind}"),
            TableEvent::HoleCardsDealt { player_id, cards } => {
                log::trace!("{player_id} dealt {} cards", cards.len())
            }
            TableEvent::BlindsPosted {
                small_blind,
                big_blind,
                ..
            } => log::debug!(
                "{} posts {}, {} posts {}",
                small_blind.0,
                small_blind.1,
                big_blind.0,
                big_blind.1
            ),
            TableEvent::BoardDealt { round, board } => {
                let cards: Vec<String> = board.iter().map(ToString::to_string).collect();
                log::debug!("{round:?}: {}", cards.join(" "))
            }
            TableEvent::ActionTaken {
                player_id,
                action,
                automatic,
                ..
            } => {
                if *automatic {
                    log::info!("{player_id} {}s (auto)", action.kind)
                } else {
                    log::info!("{player_id} {}s", action.kind)
                }
            }
            TableEvent::PotAwarded {
                player_id, amount, ..
            } => log::info!("{player_id} wins {amount}"),
            TableEvent::HandFinished { pot, .. } => log::debug!("hand finished, pot {pot}"),
            TableEvent::StatusChanged { status } => log::info!("table status: {status:?}"),
        }
    }
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: TableEvent,
}

/// История стола: наблюдатель, который просто копит события.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: TableEvent) {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
    }

    /// Только применённые действия игроков.
    pub fn actions(&self) -> Vec<&TableEvent> {
        self.events
            .iter()
            .map(|e| &e.kind)
            .filter(|k| matches!(k, TableEvent::ActionTaken { .. }))
            .collect()
    }
}

impl TableObserver for HandHistory {
    fn on_event(&mut self, event: &TableEvent) {
        self.push(event.clone());
    }
}

/// Общий наблюдатель: стол пишет в него, а снаружи можно читать.
impl<T: TableObserver> TableObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &TableEvent) {
        self.borrow_mut().on_event(event);
    }
}
