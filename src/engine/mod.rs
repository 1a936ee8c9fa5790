//! Движок игры: сборка колоды, проверка ряда, конец партии, редьюсер.
//!
//! Высокоуровневые операции:
//!   - `new_game` – собрать колоду и раздать стартовые руки
//!   - `apply_action` – применить действие, вернуть новый снапшот или причину отказа
//!   - `reduce` – то же, но недопустимое действие просто возвращает входное состояние

pub mod actions;
pub mod deck_builder;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod game_over;
pub mod positions;
pub mod row;

pub use actions::Action;
pub use deck_builder::build_deck;
pub use errors::{ActionRejected, EngineError};
pub use events::GameEvent;
pub use game_loop::{apply_action, new_game, reduce};
pub use game_over::{decide_outcome, GameOutcome};
pub use positions::{other_index, round_seats, RoundSeats, PLAYER_COUNT};
pub use row::{distinct_rainbow_colors, evaluate_row, is_rainbow_complete, scan_row, RoundEnd, RowStatus};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`), в тестах можно подставить свою.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
