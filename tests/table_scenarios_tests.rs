//! Сценарии стола целиком: 3 игрока, бай-ин 100, блайнды 1/2.
//!
//! Первая раздача: кнопка на месте 1, малый блайнд – место 2, большой – место 0.

use poker_table::domain::{parse_cards, Chips, Deck, Round, Stakes, TableOptions, TableStatus};
use poker_table::engine::{Action, Table, TableError, TableState};
use poker_table::eval::HoldemEvaluator;
use poker_table::infra::{DeterministicRng, FixedDealer, ShuffledDealer};

type TestTable = Table<ShuffledDealer<DeterministicRng>, HoldemEvaluator>;

/// Стол из трёх игроков со стандартными опциями.
fn three_handed() -> TestTable {
    let options = TableOptions::new(
        Chips::new(100),
        Stakes::new(Chips::new(1), Chips::new(2), Chips::ZERO),
    );
    Table::new(
        ShuffledDealer::new(DeterministicRng::from_seed(42)),
        HoldemEvaluator,
        options,
        ["p0", "p1", "p2"],
        &[] as &[&str],
    )
}

fn stacks(state: &TableState) -> Vec<u64> {
    (0..3).map(|seat| state.stack_at(seat).0).collect()
}

/// Все фишки на столе: стеки + то, что внесено в текущую раздачу.
fn chips_on_table(state: &TableState) -> u64 {
    state
        .seats
        .iter()
        .filter_map(|s| s.player())
        .map(|p| p.stack.0 + p.committed.0)
        .sum()
}

#[test]
fn new_table_posts_blinds_and_waits_for_seat_after_big_blind() {
    let table = three_handed();
    let state = table.state();

    assert_eq!(state.status, TableStatus::Dealing);
    assert_eq!(state.round, Round::PreFlop);
    assert_eq!(state.button, 1);
    assert_eq!(stacks(&state), vec![98, 100, 99]);
    assert_eq!(state.active_seat(), Some(1));
    assert_eq!(state.cost, Chips(2));
    assert_eq!(state.owed, Chips(2));
    assert_eq!(state.pot, Chips(3));

    assert_eq!(state.dealer.as_ref().map(|p| p.seat), Some(1));
    assert_eq!(state.small_blind.as_ref().map(|p| p.seat), Some(2));
    assert_eq!(state.big_blind.as_ref().map(|p| p.seat), Some(0));

    for p in state.seats.iter().filter_map(|s| s.player()) {
        assert_eq!(p.hole_cards.len(), 2, "каждому по две карты");
    }
}

#[test]
fn raise_moves_turn_and_cost() {
    let mut table = three_handed();

    let state = table.raise(5).expect("рейз должен пройти");

    let raiser = state.player_at(1).expect("место 1 занято");
    assert_eq!(raiser.committed, Chips(7));
    assert_eq!(raiser.stack, Chips(93));
    assert_eq!(state.active_seat(), Some(2));
    assert_eq!(state.cost, Chips(7));
    assert_eq!(state.owed, Chips(6));
}

#[test]
fn bet_and_fold_on_flop_settles_and_starts_next_hand() {
    let mut table = three_handed();

    table.raise(5).unwrap();
    table.call().unwrap();
    table.fold().unwrap();

    assert_eq!(table.round(), Round::Flop);
    assert_eq!(table.board().len(), 3);

    table.check().unwrap();
    table.bet(5).unwrap();
    let state = table.fold().unwrap();

    // Новая раздача: кнопка на 2, блайнды 0 и 1.
    assert_eq!(state.round, Round::PreFlop);
    assert_eq!(stacks(&state), vec![97, 107, 93]);
    assert_eq!(state.button, 2);
    assert_eq!(state.active_seat(), Some(2));
    assert!(state.cards.is_empty());

    let result = state.result.as_ref().expect("итог прошлой раздачи виден");
    let winners: Vec<&str> = result.winners.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(winners, vec!["p1"]);
    assert_eq!(result.pots.len(), 1);
    assert_eq!(result.pots[0].amount, Chips(21));
    assert_eq!(result.table_cards.len(), 3);
}

#[test]
fn raise_fold_call_reaches_flop_with_big_blind_first() {
    let mut table = three_handed();

    table.raise(5).unwrap();
    table.fold().unwrap();
    let state = table.call().unwrap();

    assert_eq!(state.round, Round::Flop);
    assert_eq!(state.cards.len(), state.round.board_len());
    assert_eq!(state.active_seat(), Some(0));
    assert_eq!(state.owed, Chips::ZERO);
}

#[test]
fn post_flop_folds_give_pot_to_small_blind_and_deal_next_hand() {
    let mut table = three_handed();

    table.raise(5).unwrap();
    table.call().unwrap();
    table.call().unwrap();
    assert_eq!(table.round(), Round::Flop);

    // На флопе первым ходит место 2 (слева от кнопки).
    assert_eq!(table.active().map(|p| p.seat), Some(2));
    table.bet(5).unwrap();
    table.fold().unwrap();
    let state = table.fold().unwrap();

    assert_eq!(state.round, Round::PreFlop);
    assert_eq!(stacks(&state), vec![92, 91, 114]);
    assert_eq!(state.button, 2);
}

#[test]
fn result_is_cleared_by_next_action() {
    let mut table = three_handed();

    table.raise(5).unwrap();
    table.fold().unwrap();
    table.fold().unwrap();
    assert!(table.result().is_some(), "все сфолдили – раздача рассчитана");

    let state = table.fold().unwrap();
    assert!(state.result.is_none());
}

#[test]
fn chips_are_conserved_through_many_hands() {
    let mut table = three_handed();

    for step in 0..200 {
        let legal = table.legal_actions();
        if legal.is_empty() {
            table.new_round();
            continue;
        }
        let outcome = match step % 4 {
            0 => table.call(),
            1 => table.check(),
            2 => table.bet(2),
            _ => table.fold(),
        };
        if outcome.is_err() {
            // Недопустимое действие – стол не изменился, просто коллируем/чекаем.
            let fallback = if legal.contains(&poker_table::ActionKind::Check) {
                table.check()
            } else {
                table.call()
            };
            fallback.expect("check или call всегда доступны");
        }
        assert_eq!(chips_on_table(&table.state()), 300, "шаг {step}");
    }
}

#[test]
fn big_blind_acts_after_everyone_folds() {
    let mut table = three_handed();

    table.fold().unwrap();
    let state = table.fold().unwrap();

    // Раздача не рассчитана: большой блайнд ещё должен сходить.
    assert_eq!(state.round, Round::PreFlop);
    assert_eq!(state.active_seat(), Some(0));
    assert!(state.result.is_none());
    assert_eq!(state.owed, Chips::ZERO);
    assert!(table.legal_actions().contains(&poker_table::ActionKind::Check));
    assert_eq!(stacks(&state), vec![98, 100, 99]);

    let state = table.check().unwrap();
    assert!(state.result.is_some());
    // Новая раздача: кнопка 2, малый 0, большой 1.
    assert_eq!(stacks(&state), vec![100, 98, 99]);
    assert_eq!(state.active_seat(), Some(2));
}

#[test]
fn new_round_mid_hand_returns_committed_chips() {
    let mut table = three_handed();
    table.raise(5).unwrap();
    assert_eq!(chips_on_table(&table.state()), 300);

    let state = table.new_round();

    assert_eq!(chips_on_table(&state), 300);
    assert_eq!(state.round, Round::PreFlop);
    assert_eq!(state.button, 2);
    // Только новые блайнды: малый 0, большой 1.
    assert_eq!(stacks(&state), vec![99, 98, 100]);
    assert_eq!(state.pot, Chips(3));
    assert!(state.result.is_none());
}

#[test]
fn automatic_hands_pause_after_two_settlements() {
    // Борд играет у обоих – каждая раздача делится пополам, и так без конца.
    let deck = Deck::stacked(parse_cards("2c 3d 4c 5d Ah Kh Qh Jh Th").unwrap());
    let options = TableOptions::new(
        Chips::new(1),
        Stakes::new(Chips::new(1), Chips::new(2), Chips::ZERO),
    );
    let mut table = Table::new(
        FixedDealer::new(deck),
        HoldemEvaluator,
        options,
        ["a", "b"],
        &[] as &[&str],
    );

    // Оба all-in с блайндов: никто не может ходить.
    let state = table.state();
    assert_eq!(state.status, TableStatus::Dealing);
    assert!(state.active.is_none());
    assert!(state.result.is_some(), "итог виден во время паузы");
    assert_eq!(table.act(Action::check()), Err(TableError::NoActivePlayer));

    let total = |s: &TableState| s.stack_at(0).0 + s.stack_at(1).0;
    assert_eq!(total(&state), 2);

    let state = table.new_round();
    assert!(state.active.is_none());
    assert!(state.result.is_some());
    assert_eq!(total(&state), 2);
    assert_eq!(stacks(&state)[..2], [1, 1]);
}

#[test]
fn one_shot_table_stops_after_first_hand() {
    let options = TableOptions::new(
        Chips::new(100),
        Stakes::new(Chips::new(1), Chips::new(2), Chips::ZERO),
    )
    .with_one_shot(true);
    let mut table = Table::new(
        ShuffledDealer::new(DeterministicRng::from_seed(7)),
        HoldemEvaluator,
        options,
        ["p0", "p1", "p2"],
        &[] as &[&str],
    );

    table.fold().unwrap();
    table.fold().unwrap();
    // Большой блайнд ещё не ходил – стол ждёт его.
    assert_eq!(table.status(), TableStatus::Dealing);
    let state = table.check().unwrap();

    assert_eq!(state.status, TableStatus::Done);
    assert!(state.active.is_none());
    assert!(state.result.is_some());
    assert_eq!(stacks(&state), vec![101, 100, 99]);
    assert!(table.legal_actions().is_empty());
}
