use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, HandResult, Player, Round, Seat, SeatIndex, TableOptions, TableStatus};

/// Снэпшот стола – единственная форма состояния, видимая снаружи.
///
/// Содержит и приватные данные (карманные карты). Скрывать их от
/// посторонних наблюдателей – задача внешнего слоя (см. `redacted_for`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableState {
    pub options: TableOptions,
    pub seats: Vec<Seat>,
    pub cards: Vec<Card>,
    /// Чей сейчас ход.
    pub active: Option<Player>,
    pub dealer: Option<Player>,
    pub small_blind: Option<Player>,
    pub big_blind: Option<Player>,
    pub status: TableStatus,
    pub round: Round,
    pub button: SeatIndex,
    /// Сколько всего нужно внести в этой раздаче, чтобы остаться в игре.
    pub cost: Chips,
    pub pot: Chips,
    /// Сколько должен доплатить активный игрок.
    pub owed: Chips,
    /// Итог только что рассчитанной раздачи.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<HandResult>,
}

impl TableState {
    pub fn player_at(&self, seat: SeatIndex) -> Option<&Player> {
        self.seats.get(seat).and_then(Seat::player)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.seats
            .iter()
            .filter_map(Seat::player)
            .find(|p| p.id == id)
    }

    /// Стек игрока на месте `seat` (0, если место пустое).
    pub fn stack_at(&self, seat: SeatIndex) -> Chips {
        self.player_at(seat).map(|p| p.stack).unwrap_or(Chips::ZERO)
    }

    /// Место активного игрока.
    pub fn active_seat(&self) -> Option<SeatIndex> {
        self.active.as_ref().map(|p| p.seat)
    }

    /// Копия снэпшота, где видны только карманные карты `viewer`.
    /// Итог раздачи не трогаем: на вскрытии карты претендентов открыты.
    pub fn redacted_for(&self, viewer: &str) -> TableState {
        let hide = |p: &mut Player| {
            if p.id != viewer {
                p.hole_cards.clear();
            }
        };

        let mut out = self.clone();
        for seat in out.seats.iter_mut() {
            if let Some(p) = seat.player_mut() {
                hide(p);
            }
        }
        for p in [
            &mut out.active,
            &mut out.dealer,
            &mut out.small_blind,
            &mut out.big_blind,
        ]
        .into_iter()
        .flatten()
        {
            hide(p);
        }
        out
    }
}
