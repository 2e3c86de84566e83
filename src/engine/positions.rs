use crate::domain::{Player, Seat, SeatIndex};

/// Игрок в этом месте участвует в ротации (место занято и игрок не sit out).
fn rotating(seats: &[Seat], idx: SeatIndex) -> Option<&Player> {
    seats
        .get(idx)
        .and_then(Seat::player)
        .filter(|p| p.in_rotation())
}

/// Сколько мест сейчас в ротации.
pub fn rotation_count(seats: &[Seat]) -> usize {
    (0..seats.len()).filter(|&i| rotating(seats, i).is_some()).count()
}

/// Следующее место в ротации по кругу после `from` (сам `from` – последним).
/// `None`, если в ротации никого нет.
pub fn next_seat(seats: &[Seat], from: SeatIndex) -> Option<SeatIndex> {
    let n = seats.len();
    (1..=n)
        .map(|k| (from + k) % n)
        .find(|&idx| rotating(seats, idx).is_some())
}

/// Следующий, кто обязан ходить после `from`.
///
/// Каждое другое место в ротации просматривается ровно один раз. Пропускаем
/// сфолдивших, all-in и уже походивших в этом круге.
pub fn next_to_act(seats: &[Seat], from: SeatIndex) -> Option<SeatIndex> {
    let n = seats.len();
    (1..n)
        .map(|k| (from + k) % n)
        .filter_map(|idx| rotating(seats, idx))
        .find(|p| !p.acted && p.can_bet())
        .map(|p| p.seat)
}

/// Места блайндов относительно кнопки.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlindSeats {
    pub small: SeatIndex,
    pub big: SeatIndex,
}

/// Малый и большой блайнд. Хедз-ап: кнопка сама ставит малый блайнд.
pub fn blind_seats(seats: &[Seat], button: SeatIndex) -> Option<BlindSeats> {
    match rotation_count(seats) {
        0 | 1 => return None,
        2 => {
            let big = next_seat(seats, button)?;
            return Some(BlindSeats { small: button, big });
        }
        _ => {}
    }
    let small = next_seat(seats, button)?;
    let big = next_seat(seats, small)?;
    Some(BlindSeats { small, big })
}

/// Сколько шагов `next_seat` от кнопки до `seat`. Сама кнопка – дальше всех (полный круг).
/// Место вне ротации получает расстояние больше любого реального.
pub fn distance_from_button(seats: &[Seat], button: SeatIndex, seat: SeatIndex) -> usize {
    let n = seats.len();
    let mut dist = 0;
    for k in 1..=n {
        let idx = (button + k) % n;
        if rotating(seats, idx).is_some() {
            dist += 1;
            if idx == seat {
                return dist;
            }
        }
    }
    n + 1
}
