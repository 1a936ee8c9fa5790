// src/time_ctrl/clock.rs
//! Тик таймера текущего хода.

use serde::{Deserialize, Serialize};

/// Результат одного тика.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeoutState {
    /// Время ещё не вышло, игрок может думать дальше.
    Ongoing { remaining_secs: u32 },
    /// Время хода вышло, движок должен сам завершить ход.
    TimedOut,
}

/// Списать одну секунду с таймера.
///
/// Таймер, который уже стоит на нуле (например, пришёл таким в снапшоте),
/// тоже считается истёкшим.
pub fn tick(remaining_secs: u32) -> TimeoutState {
    match remaining_secs.saturating_sub(1) {
        0 => TimeoutState::TimedOut,
        left => TimeoutState::Ongoing {
            remaining_secs: left,
        },
    }
}
