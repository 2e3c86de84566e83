use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};

/// Состояние игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub seat: SeatIndex,
    /// Фишки за столом, ещё не поставленные в банк.
    pub stack: Chips,
    /// Сколько игрок внёс в банк в текущей раздаче (все улицы).
    pub committed: Chips,
    /// Уже действовал в текущем круге ставок.
    pub acted: bool,
    pub folded: bool,
    pub all_in: bool,
    /// Не участвует в раздаче (пересчитывается на каждом префлопе).
    pub sitting_out: bool,
    /// Автоматически фолдит каждую раздачу, но остаётся за столом.
    pub defaulting: bool,
    /// Карманные карты (пусто, если не участвует).
    pub hole_cards: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, seat: SeatIndex, stack: Chips) -> Self {
        Self {
            id: id.into(),
            seat,
            stack,
            committed: Chips::ZERO,
            acted: false,
            folded: false,
            all_in: false,
            sitting_out: false,
            defaulting: false,
            hole_cards: Vec::new(),
        }
    }

    /// Поставить `chips` в банк. Ставка ограничена стеком: если стека не хватает
    /// (или он уходит целиком), излишек отбрасывается и игрок становится all-in.
    /// Возвращает реально внесённую сумму.
    pub fn contribute(&mut self, chips: Chips) -> Chips {
        let mut amount = chips;
        if self.stack <= amount {
            amount = self.stack;
            self.all_in = true;
        }
        self.committed += amount;
        self.stack -= amount;
        amount
    }

    /// Сброс полей, живущих одну раздачу.
    pub fn reset_for_hand(&mut self) {
        self.hole_cards.clear();
        self.committed = Chips::ZERO;
        self.acted = false;
        self.folded = false;
        self.all_in = false;
    }

    /// Участвует в ротации кнопки и очереди ходов.
    pub fn in_rotation(&self) -> bool {
        !self.sitting_out
    }

    /// Претендент на банк: не сфолдил и не sit out.
    pub fn is_contesting(&self) -> bool {
        !self.folded && !self.sitting_out
    }

    /// Может ещё ставить фишки в этой раздаче.
    pub fn can_bet(&self) -> bool {
        self.is_contesting() && !self.all_in
    }
}

/// Место за столом: занято игроком или пустует. Индексы мест фиксированы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Seat {
    Occupied(Player),
    Vacant,
}

impl Seat {
    pub fn player(&self) -> Option<&Player> {
        match self {
            Seat::Occupied(p) => Some(p),
            Seat::Vacant => None,
        }
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Seat::Occupied(p) => Some(p),
            Seat::Vacant => None,
        }
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self, Seat::Vacant)
    }
}
