use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::{PlayerId, SeatIndex};

/// Улица (раунд ставок).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Round {
    /// Сколько общих карт открыто на этой улице.
    pub fn board_len(self) -> usize {
        match self {
            Round::PreFlop => 0,
            Round::Flop => 3,
            Round::Turn => 4,
            Round::River => 5,
        }
    }

    /// Следующая улица; после ривера – снова префлоп новой раздачи.
    pub fn next(self) -> Round {
        match self {
            Round::PreFlop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River => Round::PreFlop,
        }
    }
}

/// Ранг руки. Чем больше число, тем сильнее рука; заполняется в eval.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Выплата одного пота.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    /// Размер пота.
    pub amount: Chips,
    /// Кто претендовал на этот пот.
    pub eligible: Vec<SeatIndex>,
    /// (игрок, сколько получил) в порядке удалённости от кнопки.
    pub shares: Vec<(PlayerId, Chips)>,
}

/// Итог раздачи: виден в снапшоте сразу после расчёта банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    /// Все победители (по всем потам, без повторов), уже с начисленными фишками.
    pub winners: Vec<Player>,
    /// Все, кто дошёл до расчёта (не сфолдил и не sit out).
    pub contestants: Vec<Player>,
    /// Борд на момент расчёта.
    pub table_cards: Vec<Card>,
    /// Детализация по каждому поту, от младшего к старшему.
    pub pots: Vec<PotAward>,
}
