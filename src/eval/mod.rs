//! Оценка силы рук. Движок стола зависит только от трейта `HandEvaluator`,
//! конкретные оценщики (холдем, омаха) лежат здесь.

use core::fmt::Debug;

use crate::domain::card::Card;

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::{evaluate_five, HoldemEvaluator, OmahaEvaluator, VariantEvaluator};
pub use hand_rank::HandCategory;

/// Оценщик рук: по карманным картам и борду строит сравнимый ранг.
/// Больший ранг – более сильная рука, равные ранги – сплит.
pub trait HandEvaluator {
    type Rank: Ord + Clone + Debug;

    fn rank(&self, hole: &[Card], board: &[Card]) -> Self::Rank;
}
