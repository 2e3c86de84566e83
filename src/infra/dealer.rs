use crate::domain::deck::{Dealer, Deck};
use crate::engine::RandomSource;

/// Дилер: на каждую раздачу берёт свежую 52-карточную колоду и тасует её.
#[derive(Clone, Debug)]
pub struct ShuffledDealer<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> ShuffledDealer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> Dealer for ShuffledDealer<R> {
    fn deck(&mut self) -> Deck {
        let mut deck = Deck::standard_52();
        self.rng.shuffle(&mut deck.cards);
        deck
    }
}

/// Дилер для реплея: каждую раздачу отдаёт одну и ту же заранее сложенную колоду.
#[derive(Clone, Debug)]
pub struct FixedDealer {
    deck: Deck,
}

impl FixedDealer {
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }
}

impl Dealer for FixedDealer {
    fn deck(&mut self) -> Deck {
        self.deck.clone()
    }
}
