use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. Верх колоды – конец вектора.
/// Перемешивание делает дилер (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    /// Колода, из которой карты будут сданы ровно в порядке `in_deal_order`.
    pub fn stacked(mut in_deal_order: Vec<Card>) -> Self {
        in_deal_order.reverse();
        Deck {
            cards: in_deal_order,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху (меньше, если колода кончилась).
    pub fn pop_multi(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut taken = self.cards.split_off(self.cards.len() - take);
        taken.reverse();
        taken
    }
}

/// Источник свежих колод для каждой новой раздачи.
pub trait Dealer {
    fn deck(&mut self) -> Deck;
}
