//! Доменная модель игры: цвета, карты, колода, игроки, состояние партии.

pub mod card;
pub mod color;
pub mod config;
pub mod deck;
pub mod game;
pub mod player;

/// Идентификатор игрока (приходит от хоста, например uid авторизации).
pub type PlayerId = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use color::*;
pub use config::*;
pub use deck::*;
pub use game::*;
pub use player::*;
