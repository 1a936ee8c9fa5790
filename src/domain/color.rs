use core::fmt;

use serde::{Deserialize, Serialize};

/// Цвет одной грани карты.
///
/// Семь цветов радуги плюс два особых:
/// - `White` — "безопасный", никогда не считается повтором;
/// - `Black` — "опасный", открытая чёрная грань сразу заканчивает раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    White,
    Black,
}

impl Color {
    /// Все цвета в каноническом порядке.
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Indigo,
        Color::Violet,
        Color::White,
        Color::Black,
    ];

    /// Цвет радуги (всё, кроме White и Black).
    pub const fn is_rainbow(self) -> bool {
        !matches!(self, Color::White | Color::Black)
    }

    pub const fn is_safe(self) -> bool {
        matches!(self, Color::White)
    }

    pub const fn is_hazard(self) -> bool {
        matches!(self, Color::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "красный",
            Color::Orange => "оранжевый",
            Color::Yellow => "жёлтый",
            Color::Green => "зелёный",
            Color::Blue => "голубой",
            Color::Indigo => "синий",
            Color::Violet => "фиолетовый",
            Color::White => "белый",
            Color::Black => "чёрный",
        };
        write!(f, "{name}")
    }
}
