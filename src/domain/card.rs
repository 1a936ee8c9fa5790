use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::color::Color;

/// Идентификатор карты внутри одной колоды (0..DECK_SIZE).
pub type CardId = u8;

/// Двусторонняя карта.
///
/// `front_color` видит владелец карты, `back_color` смотрит на соперника.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub front_color: Color,
    pub back_color: Color,
}

impl Card {
    pub const fn new(id: CardId, front_color: Color, back_color: Color) -> Self {
        Self {
            id,
            front_color,
            back_color,
        }
    }

    /// Та же карта, повёрнутая другой стороной к владельцу.
    pub const fn flipped(self) -> Self {
        Self {
            id: self.id,
            front_color: self.back_color,
            back_color: self.front_color,
        }
    }

    pub fn has_distinct_faces(&self) -> bool {
        self.front_color != self.back_color
    }
}

impl fmt::Display for Card {
    /// Формат вида `#12 красный/белый`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}/{}", self.id, self.front_color, self.back_color)
    }
}

/// Карта, выложенная в общий ряд.
///
/// Публичной гранью считается `front_color`, пока карта лежит лицом вверх.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CenterRowCard {
    #[serde(flatten)]
    pub card: Card,
    pub is_face_up: bool,
}

impl CenterRowCard {
    /// Выложить карту из руки.
    ///
    /// Обычный ход открывает грань, которую видел владелец.
    /// "Вслепую" открывается скрытая от владельца грань: стороны меняются местами,
    /// но карта всё равно ложится лицом вверх.
    pub const fn played(card: Card, is_blind: bool) -> Self {
        let card = if is_blind { card.flipped() } else { card };
        Self {
            card,
            is_face_up: true,
        }
    }

    /// Цвет, который сейчас видят оба игрока (None, если карта перевёрнута).
    pub fn visible_color(&self) -> Option<Color> {
        self.is_face_up.then_some(self.card.front_color)
    }

    pub const fn face_down(self) -> Self {
        Self {
            card: self.card,
            is_face_up: false,
        }
    }

    pub const fn face_up(self) -> Self {
        Self {
            card: self.card,
            is_face_up: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blind_play_exposes_back_face() {
        let card = Card::new(7, Color::Red, Color::Black);

        let normal = CenterRowCard::played(card, false);
        assert_eq!(normal.visible_color(), Some(Color::Red));

        let blind = CenterRowCard::played(card, true);
        assert!(blind.is_face_up);
        assert_eq!(blind.visible_color(), Some(Color::Black));
        assert_eq!(blind.card.id, 7);
    }

    #[test]
    fn face_down_card_has_no_visible_color() {
        let row_card = CenterRowCard::played(Card::new(1, Color::Green, Color::White), false);
        assert_eq!(row_card.face_down().visible_color(), None);
        assert_eq!(row_card.face_down().face_up().visible_color(), Some(Color::Green));
    }

    #[test]
    fn row_card_json_is_flat() {
        let row_card = CenterRowCard::played(Card::new(3, Color::Blue, Color::Violet), false);
        let json = serde_json::to_value(row_card).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["frontColor"], "BLUE");
        assert_eq!(json["backColor"], "VIOLET");
        assert_eq!(json["isFaceUp"], true);
    }
}
