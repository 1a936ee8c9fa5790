use crate::domain::RoundEndReason;
use crate::engine::RandomSource;

/// В партии всегда двое.
pub const PLAYER_COUNT: usize = 2;

/// Индекс соперника.
pub const fn other_index(index: usize) -> usize {
    (index + 1) % PLAYER_COUNT
}

/// Кто ходит первым в новой партии: жребий из того же RNG, что собирал колоду.
pub fn draw_first_seat<R: RandomSource>(rng: &mut R) -> usize {
    let mut seats = [0, other_index(0)];
    rng.shuffle(&mut seats);
    seats[0]
}

/// Кто забирает ряд и кто начинает следующий раунд.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSeats {
    pub winner: usize,
    pub starter: usize,
}

/// Рассадка после раунда:
/// - радуга: ряд забирает ходивший, следующий раунд начинает соперник;
/// - повтор цвета / чёрная карта: ряд забирает соперник,
///   а ходивший (проигравший) снова ходит первым.
pub const fn round_seats(actor: usize, reason: RoundEndReason) -> RoundSeats {
    if reason.actor_wins() {
        RoundSeats {
            winner: actor,
            starter: other_index(actor),
        }
    } else {
        RoundSeats {
            winner: other_index(actor),
            starter: actor,
        }
    }
}
