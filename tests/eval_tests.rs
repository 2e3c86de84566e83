//! Оценка рук: категории, кикеры, колесо, правило омахи.

use poker_table::domain::{parse_cards, Card, HandRank};
use poker_table::eval::{evaluate_five, HandCategory, HandEvaluator, HoldemEvaluator, OmahaEvaluator};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn five(s: &str) -> HandRank {
    evaluate_five(&cards(s))
}

#[test]
fn categories_are_recognised() {
    let cases = [
        ("Ah Kd 9s 4c 3h", HandCategory::HighCard),
        ("Ah Ad 9s 4c 3h", HandCategory::OnePair),
        ("Ah Ad 9s 9c 3h", HandCategory::TwoPair),
        ("Ah Ad As 4c 3h", HandCategory::ThreeOfAKind),
        ("9h Td Js Qc Kh", HandCategory::Straight),
        ("Ah Th 9h 4h 3h", HandCategory::Flush),
        ("Ah Ad As 4c 4h", HandCategory::FullHouse),
        ("Ah Ad As Ac 3h", HandCategory::FourOfAKind),
        ("9h Th Jh Qh Kh", HandCategory::StraightFlush),
    ];
    for (hand, expected) in cases {
        assert_eq!(five(hand).category(), expected, "{hand}");
    }
}

#[test]
fn categories_order_by_strength() {
    assert!(five("Ah Ad 9s 4c 3h") > five("Ah Kd 9s 4c 3h"));
    assert!(five("2h 2d 2s 3c 3h") > five("Ah Th 9h 4h 3h"));
    assert!(five("9h Th Jh Qh Kh") > five("Ah Ad As Ac 3h"));
}

#[test]
fn kickers_break_ties_within_category() {
    assert!(five("Ah Ad Ks 4c 3h") > five("Ah Ad Qs 4c 3h"));
    assert!(five("Kh Kd 2s 2c Ah") > five("Kh Kd 2s 2c Qh"));
    assert_eq!(five("Ah Ad Ks 4c 3h"), five("As Ac Kd 4h 3s"));
}

#[test]
fn wheel_is_five_high_straight() {
    let wheel = five("Ah 2d 3s 4c 5h");
    assert_eq!(wheel.category(), HandCategory::Straight);
    assert!(five("2h 3d 4s 5c 6h") > wheel);
    assert!(wheel > five("Ah Ad As 4c 3h"));
}

#[test]
fn holdem_uses_best_five_of_seven() {
    let rank = HoldemEvaluator.rank(&cards("7h 2h"), &cards("Ah Kh 9h 4c 3d"));
    assert_eq!(rank.category(), HandCategory::Flush);
}

#[test]
fn holdem_with_short_board_scores_zero() {
    assert_eq!(HoldemEvaluator.rank(&cards("Ah Ad"), &cards("Kh")), HandRank(0));
}

#[test]
fn omaha_requires_exactly_two_hole_cards() {
    let hole = cards("As Ks Qs Js");
    let board = cards("Ts 2h 3d 4c 9h");

    // Холдем-подход собрал бы роял-флеш из четырёх карманных.
    assert_eq!(HoldemEvaluator.rank(&hole, &board).category(), HandCategory::StraightFlush);

    let omaha = OmahaEvaluator.rank(&hole, &board);
    assert!(omaha.category() < HandCategory::Straight);
}

#[test]
fn omaha_board_flush_needs_two_suited_hole_cards() {
    let board = cards("2h 7h 9h Jh 4c");

    let one_heart = OmahaEvaluator.rank(&cards("Ah Kd Qc 3s"), &board);
    assert!(one_heart.category() < HandCategory::Flush);

    let two_hearts = OmahaEvaluator.rank(&cards("Ah Kh Qc 3s"), &board);
    assert_eq!(two_hearts.category(), HandCategory::Flush);
}

#[test]
fn card_parsing_round_trips_display() {
    let parsed = cards("Ah Td 7c 2s");
    let shown: Vec<String> = parsed.iter().map(ToString::to_string).collect();
    assert_eq!(shown, vec!["Ah", "Td", "7c", "2s"]);

    assert!("Xh".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
}
