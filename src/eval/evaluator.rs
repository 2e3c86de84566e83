use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;
use crate::domain::table::Variant;

use super::hand_rank::HandCategory;
use super::HandEvaluator;

/// Холдем: лучшая 5-карточная комбинация из любых карт руки и борда (5–7 карт).
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldemEvaluator;

impl HandEvaluator for HoldemEvaluator {
    type Rank = HandRank;

    fn rank(&self, hole: &[Card], board: &[Card]) -> HandRank {
        let all: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
        combinations(all.len(), 5)
            .iter()
            .map(|idx| evaluate_five(&pick(&all, idx)))
            .max()
            .unwrap_or(HandRank(0))
    }
}

/// Омаха: ровно две карманные карты и ровно три карты борда.
#[derive(Clone, Copy, Debug, Default)]
pub struct OmahaEvaluator;

impl HandEvaluator for OmahaEvaluator {
    type Rank = HandRank;

    fn rank(&self, hole: &[Card], board: &[Card]) -> HandRank {
        let mut best: Option<HandRank> = None;
        for h in combinations(hole.len(), 2) {
            for b in combinations(board.len(), 3) {
                let mut five = pick(hole, &h);
                five.extend(pick(board, &b));
                let r = evaluate_five(&five);
                if best.map_or(true, |cur| r > cur) {
                    best = Some(r);
                }
            }
        }
        best.unwrap_or(HandRank(0))
    }
}

/// Оценщик, выбираемый по разновидности игры из опций стола.
#[derive(Clone, Copy, Debug)]
pub enum VariantEvaluator {
    Holdem(HoldemEvaluator),
    Omaha(OmahaEvaluator),
}

impl VariantEvaluator {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::TexasHoldem => VariantEvaluator::Holdem(HoldemEvaluator),
            Variant::OmahaHi => VariantEvaluator::Omaha(OmahaEvaluator),
        }
    }
}

impl HandEvaluator for VariantEvaluator {
    type Rank = HandRank;

    fn rank(&self, hole: &[Card], board: &[Card]) -> HandRank {
        match self {
            VariantEvaluator::Holdem(e) => e.rank(hole, board),
            VariantEvaluator::Omaha(e) => e.rank(hole, board),
        }
    }
}

fn pick(cards: &[Card], idx: &[usize]) -> Vec<Card> {
    idx.iter().map(|&i| cards[i]).collect()
}

/// Все сочетания k индексов из 0..n в лексикографическом порядке.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn walk(start: usize, n: usize, k: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if cur.len() == k {
            out.push(cur.clone());
            return;
        }
        for i in start..n {
            cur.push(i);
            walk(i + 1, n, k, cur, out);
            cur.pop();
        }
    }

    let mut out = Vec::new();
    if k <= n {
        walk(0, n, k, &mut Vec::with_capacity(k), &mut out);
    }
    out
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_five(cards: &[Card]) -> HandRank {
    debug_assert_eq!(cards.len(), 5);

    let is_flush = cards.windows(2).all(|w| w[0].suit == w[1].suit);

    // (количество, ранг), сначала по количеству, потом по рангу – оба по убыванию.
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for card in cards {
        match groups.iter_mut().find(|(_, r)| *r == card.rank) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, card.rank)),
        }
    }
    groups.sort_by(|a, b| b.cmp(a));

    let ranks: Vec<Rank> = groups.iter().map(|&(_, r)| r).collect();
    let pattern: Vec<u8> = groups.iter().map(|&(c, _)| c).collect();
    let straight_high = straight_high(&ranks);

    let category = match (pattern.as_slice(), is_flush, straight_high) {
        (_, true, Some(_)) => HandCategory::StraightFlush,
        ([4, 1], _, _) => HandCategory::FourOfAKind,
        ([3, 2], _, _) => HandCategory::FullHouse,
        (_, true, None) => HandCategory::Flush,
        (_, false, Some(_)) => HandCategory::Straight,
        ([3, 1, 1], _, _) => HandCategory::ThreeOfAKind,
        ([2, 2, 1], _, _) => HandCategory::TwoPair,
        ([2, 1, 1, 1], _, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight_high) {
        (HandCategory::StraightFlush | HandCategory::Straight, Some(high)) => {
            HandRank::encode(category, &[high])
        }
        _ => HandRank::encode(category, &ranks),
    }
}

/// Старшая карта стрита, если 5 разных рангов идут подряд (A2345 – стрит до пятёрки).
fn straight_high(distinct_desc: &[Rank]) -> Option<Rank> {
    if distinct_desc.len() != 5 {
        return None;
    }
    let mut sorted: Vec<u8> = distinct_desc.iter().map(|r| r.value()).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    if sorted == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    if sorted[0] - sorted[4] == 4 {
        return Rank::from_value(sorted[0]);
    }
    None
}
