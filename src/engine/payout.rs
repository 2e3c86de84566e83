use std::collections::HashMap;

use crate::domain::{Card, Chips, Seat, SeatIndex};
use crate::engine::positions::distance_from_button;
use crate::engine::side_pots::{compute_side_pots, Contribution, SidePot};
use crate::eval::HandEvaluator;

/// Расчёт одного пота: кому и сколько.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PotSettlement {
    pub pot: SidePot,
    /// (место, выигрыш) в порядке удалённости от кнопки.
    pub shares: Vec<(SeatIndex, Chips)>,
}

/// Разделить пот поровну; лишние фишки по одной раздаются первым в списке.
pub fn split_pot(amount: Chips, winners: &[SeatIndex]) -> Vec<(SeatIndex, Chips)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u64;
    let share = amount.0 / n;
    let remainder = amount.0 % n;

    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| {
            let odd = if (i as u64) < remainder { 1 } else { 0 };
            (seat, Chips(share + odd))
        })
        .collect()
}

/// Посчитать все поты и их победителей. Стол не меняется – начисление делает вызывающий.
///
/// Поты идут от младшего уровня к старшему. Единственный претендент забирает пот
/// без вскрытия, иначе побеждают все с лучшей рукой; ближний к кнопке получает
/// нечётные фишки первым.
pub fn settle_pots<E: HandEvaluator>(
    seats: &[Seat],
    button: SeatIndex,
    board: &[Card],
    evaluator: &E,
) -> Vec<PotSettlement> {
    let pots = compute_side_pots(&Contribution::from_seats(seats));
    let mut ranks: HashMap<SeatIndex, E::Rank> = HashMap::new();
    let mut settlements = Vec::with_capacity(pots.len());

    for pot in pots {
        let winners = if pot.eligible_seats.len() == 1 {
            pot.eligible_seats.clone()
        } else {
            let mut ranked: Vec<(SeatIndex, E::Rank)> = Vec::with_capacity(pot.eligible_seats.len());
            for &seat in &pot.eligible_seats {
                let hole = seats
                    .get(seat)
                    .and_then(Seat::player)
                    .map(|p| p.hole_cards.as_slice())
                    .unwrap_or(&[]);
                let rank = ranks
                    .entry(seat)
                    .or_insert_with(|| evaluator.rank(hole, board))
                    .clone();
                ranked.push((seat, rank));
            }
            ranked.sort_by(|a, b| b.1.cmp(&a.1));

            let mut winners: Vec<SeatIndex> = match ranked.first() {
                Some((_, best)) => ranked
                    .iter()
                    .take_while(|(_, r)| r == best)
                    .map(|(s, _)| *s)
                    .collect(),
                None => Vec::new(),
            };
            winners.sort_by_key(|&s| distance_from_button(seats, button, s));
            winners
        };

        let shares = split_pot(pot.amount, &winners);
        settlements.push(PotSettlement { pot, shares });
    }

    settlements
}
