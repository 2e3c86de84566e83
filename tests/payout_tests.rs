//! Шоудаун: кто забирает поты, деление и нечётные фишки.

use poker_table::domain::{parse_cards, Chips, Deck, Player, Round, Seat, Stakes, TableOptions, TableStatus};
use poker_table::engine::{settle_pots, split_pot, Table};
use poker_table::eval::HoldemEvaluator;
use poker_table::infra::FixedDealer;

/// Игрок с вкладом и картами.
fn seat(id: &str, idx: usize, committed: u64, hole: &str) -> Seat {
    let mut p = Player::new(id, idx, Chips(100));
    p.committed = Chips(committed);
    p.hole_cards = parse_cards(hole).unwrap();
    Seat::Occupied(p)
}

#[test]
fn split_gives_odd_chips_to_first_winners() {
    assert_eq!(split_pot(Chips(7), &[2, 0]), vec![(2, Chips(4)), (0, Chips(3))]);
    assert_eq!(
        split_pot(Chips(11), &[1, 2, 0]),
        vec![(1, Chips(4)), (2, Chips(4)), (0, Chips(3))]
    );
    assert!(split_pot(Chips(5), &[]).is_empty());
}

#[test]
fn best_hand_takes_the_pot() {
    let seats = vec![
        seat("a", 0, 10, "As Ad"),
        seat("b", 1, 10, "2c 7d"),
    ];
    let board = parse_cards("Ah Kd 9s 4c 3h").unwrap();

    let settled = settle_pots(&seats, 0, &board, &HoldemEvaluator);

    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].shares, vec![(0, Chips(20))]);
}

#[test]
fn tie_remainder_goes_to_seat_closer_to_button() {
    let mut seats = vec![
        seat("a", 0, 1, "2c 3d"),
        seat("b", 1, 3, "4c 5d"),
        seat("c", 2, 3, "6c 7d"),
    ];
    if let Some(p) = seats[0].player_mut() {
        p.folded = true;
    }
    // Борд играет у всех.
    let board = parse_cards("Ah Kh Qh Jh Th").unwrap();

    let settled = settle_pots(&seats, 0, &board, &HoldemEvaluator);
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].pot.amount, Chips(7));
    assert_eq!(settled[0].shares, vec![(1, Chips(4)), (2, Chips(3))]);

    // Кнопка на месте 1: ближе теперь место 2, сама кнопка – последней.
    let settled = settle_pots(&seats, 1, &board, &HoldemEvaluator);
    assert_eq!(settled[0].shares, vec![(2, Chips(4)), (1, Chips(3))]);
}

#[test]
fn short_stack_wins_only_the_main_pot() {
    let seats = vec![
        seat("short", 0, 50, "As Ad"),
        seat("mid", 1, 100, "Ks Kd"),
        seat("big", 2, 100, "2c 7d"),
    ];
    let board = parse_cards("Ah Kh 9s 4c 3d").unwrap();

    let settled = settle_pots(&seats, 2, &board, &HoldemEvaluator);

    assert_eq!(settled.len(), 2);
    assert_eq!(settled[0].pot.amount, Chips(150));
    assert_eq!(settled[0].shares, vec![(0, Chips(150))]);
    assert_eq!(settled[1].pot.amount, Chips(100));
    assert_eq!(settled[1].shares, vec![(1, Chips(100))]);
}

#[test]
fn heads_up_all_in_runs_out_the_board() {
    // Порядок сдачи: карты места 0, места 1, флоп, тёрн, ривер.
    let deck = Deck::stacked(parse_cards("As Ad Kc Kd 2h 7s 9c 4d Jh").unwrap());
    let options = TableOptions::new(
        Chips::new(100),
        Stakes::new(Chips::new(1), Chips::new(2), Chips::ZERO),
    );
    let mut table = Table::new(
        FixedDealer::new(deck),
        HoldemEvaluator,
        options,
        ["a", "b"],
        &[] as &[&str],
    );

    // Хедз-ап: кнопка (место 1) ставит малый блайнд и ходит первой.
    assert_eq!(table.button(), 1);
    assert_eq!(table.active().map(|p| p.seat), Some(1));

    table.all_in().unwrap();
    let state = table.call().unwrap();

    // Проигравший без фишек – стол сломан до новых игроков/докупки.
    assert_eq!(state.status, TableStatus::Broken);
    assert!(state.active.is_none());
    assert_eq!(state.stack_at(0), Chips(200));
    assert_eq!(state.stack_at(1), Chips(0));
    assert_eq!(state.round, Round::PreFlop);

    let result = state.result.expect("итог виден");
    assert_eq!(result.winners.len(), 1);
    assert_eq!(result.winners[0].id, "a");
    assert_eq!(result.contestants.len(), 2);
    assert_eq!(result.table_cards, parse_cards("2h 7s 9c 4d Jh").unwrap());
}
