// src/bin/poker_table_cli.rs
//
// Dev-CLI: один стол, действия читаются из stdin построчно.
//   fold | check | call | bet N | raise N | allin | new | quit
// Первый аргумент (если есть) – seed для воспроизводимой раздачи.

use std::io::{self, BufRead};

use poker_table::domain::{Chips, Stakes, TableOptions};
use poker_table::engine::{Action, Table, TableState};
use poker_table::eval::VariantEvaluator;
use poker_table::infra::{DeterministicRng, ShuffledDealer};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    println!("poker_table_cli: стартуем стол, seed={seed}");

    let options = TableOptions::new(
        Chips::new(100),
        Stakes::new(Chips::new(1), Chips::new(2), Chips::ZERO),
    );
    let dealer = ShuffledDealer::new(DeterministicRng::from_seed(seed));
    let mut table = Table::for_variant(dealer, options, ["alice", "bob", "carol"], &[] as &[&str]);

    print_state(&table.state());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                println!("[CLI] Ошибка чтения stdin: {e}");
                break;
            }
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        let chips = words.get(1).and_then(|w| w.parse::<u64>().ok()).unwrap_or(0);

        let action = match words.first().copied() {
            None => continue,
            Some("quit") | Some("q") => break,
            Some("new") => {
                print_state(&table.new_round());
                continue;
            }
            Some("fold") => Action::fold(),
            Some("check") => Action::check(),
            Some("call") => Action::call(),
            Some("bet") => Action::bet(chips),
            Some("raise") => Action::raise(chips),
            Some("allin") => Action::all_in(),
            Some(other) => {
                println!("[CLI] Неизвестная команда: {other}");
                continue;
            }
        };

        match table.act(action) {
            Ok(state) => print_state(&state),
            Err(e) => println!("[CLI] Действие отклонено: {e}"),
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

fn print_state(state: &TableState) {
    println!("================ TABLE STATE ================");
    println!(
        "status={:?} round={:?} button={} pot={} cost={}",
        state.status, state.round, state.button, state.pot, state.cost
    );
    let board: Vec<String> = state.cards.iter().map(ToString::to_string).collect();
    println!("board: [{}]", board.join(" "));

    println!("players:");
    for p in state.seats.iter().filter_map(|s| s.player()) {
        let cards: Vec<String> = p.hole_cards.iter().map(ToString::to_string).collect();
        let marker = if state.active_seat() == Some(p.seat) { ">" } else { " " };
        println!(
            "{marker} seat {} {:<8} stack={:<5} committed={:<4} [{}]{}{}",
            p.seat,
            p.id,
            p.stack,
            p.committed,
            cards.join(" "),
            if p.folded { " folded" } else { "" },
            if p.all_in { " all-in" } else { "" },
        );
    }

    if let Some(result) = &state.result {
        let winners: Vec<&str> = result.winners.iter().map(|p| p.id.as_str()).collect();
        println!("=== РАЗДАЧА ЗАВЕРШЕНА === победители: {}", winners.join(", "));
    }
    if let Some(active) = &state.active {
        println!("ход: {} (к оплате {})", active.id, state.owed);
    }
}
