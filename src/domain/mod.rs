//! Доменная модель стола: карты, колода, фишки, игроки, места, опции стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Идентификатор игрока – строка, которую выдаёт внешний сервис.
pub type PlayerId = String;

/// Индекс места за столом (0..seats.len()-1).
pub type SeatIndex = usize;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
