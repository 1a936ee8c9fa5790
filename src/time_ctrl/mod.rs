// src/time_ctrl/mod.rs
//! Контроль времени хода.
//!
//! Здесь собираем:
//! - правила (`TimeRules`);
//! - тик таймера хода (`tick`, `TimeoutState`).
//!
//! Сам таймер живёт в `GameState::turn_timer`, хост дёргает TICK_TIMER примерно раз в секунду.

pub mod clock;
pub mod time_rules;

pub use clock::{tick, TimeoutState};
pub use time_rules::{TimeProfile, TimeRules};
