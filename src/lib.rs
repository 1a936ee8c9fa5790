//! Движок карточной игры "Arcoíris Táctico" для двух игроков.
//!
//! Игроки по очереди открывают двусторонние карты в общий ряд и пытаются
//! собрать радугу раньше, чем откроется повтор цвета или чёрная карта.
//!
//! Ядро — чистый редьюсер `engine::reduce(state, action) -> state`:
//! никаких побочных эффектов, одно и то же (состояние, действие) всегда даёт
//! одно и то же новое состояние. Хранение, сеть, UI и таймер остаются на стороне хоста.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod time_ctrl;

pub use domain::{GameConfig, GameState, PlayerProfile};
pub use engine::{apply_action, new_game, reduce, Action, ActionRejected, EngineError};
pub use infra::RngSeed;
