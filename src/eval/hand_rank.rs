use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn describe(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

impl HandRank {
    /// Собрать HandRank из категории и значимых рангов (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Недостающие ранги кодируются нулём и в сравнении не участвуют.
    pub fn encode(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut value = (category as u32) & 0x0F;
        for i in 0..5 {
            let nibble = ranks.get(i).map(|r| r.value() as u32).unwrap_or(0);
            value = (value << 4) | (nibble & 0x0F);
        }
        HandRank(value)
    }

    pub fn category(&self) -> HandCategory {
        let id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }
}
