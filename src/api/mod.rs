//! Внешний API движка для хоста (UI).
//!
//! Здесь описываются:
//! - DTO (dto.rs): вид партии глазами одного игрока, без скрытой информации.
//!
//! Действия (`engine::Action`) хост отправляет в редьюсер напрямую.

pub mod dto;

pub use dto::*;
