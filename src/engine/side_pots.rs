use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Seat, SeatIndex};

/// Сайд-пот: часть банка, на которую претендуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// Вклад одного места в банк текущей раздачи.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub seat: SeatIndex,
    pub chips: Chips,
    /// Претендует ли место на банк (не сфолдил и не sit out).
    pub contesting: bool,
}

impl Contribution {
    pub fn new(seat: SeatIndex, chips: u64, contesting: bool) -> Self {
        Self {
            seat,
            chips: Chips(chips),
            contesting,
        }
    }

    /// Вклады всех занятых мест в порядке индексов.
    pub fn from_seats(seats: &[Seat]) -> Vec<Contribution> {
        seats
            .iter()
            .filter_map(Seat::player)
            .map(|p| Contribution {
                seat: p.seat,
                chips: p.committed,
                contesting: p.is_contesting(),
            })
            .collect()
    }
}

/// Разбить банк на поты по уровням вклада претендентов.
///
/// Каждый различный уровень L (по возрастанию) даёт пот, на который претендуют
/// те, кто внёс не меньше L. В пот идёт вклад каждого места (включая сфолдивших),
/// обрезанный полосой (предыдущий уровень, L]. Всё, что выше последнего уровня,
/// достаётся старшему поту, поэтому сумма потов равна сумме вкладов.
pub fn compute_side_pots(contributions: &[Contribution]) -> Vec<SidePot> {
    let mut levels: Vec<Chips> = contributions
        .iter()
        .filter(|c| c.contesting)
        .map(|c| c.chips)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev_level = Chips::ZERO;

    for (i, &level) in levels.iter().enumerate() {
        let is_top = i + 1 == levels.len();

        let amount: Chips = contributions
            .iter()
            .map(|c| {
                if is_top {
                    c.chips.saturating_sub(prev_level)
                } else {
                    c.chips.clip_band(prev_level, level)
                }
            })
            .sum();

        let eligible_seats: Vec<SeatIndex> = contributions
            .iter()
            .filter(|c| c.contesting && c.chips >= level)
            .map(|c| c.seat)
            .collect();

        if !amount.is_zero() {
            pots.push(SidePot {
                amount,
                eligible_seats,
            });
        }

        prev_level = level;
    }

    pots
}
