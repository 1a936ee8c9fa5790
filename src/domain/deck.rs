use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::color::Color;

/// Сколько "цветовых единиц" каждого цвета в колоде.
pub const COLOR_DISTRIBUTION: [(Color, usize); 9] = [
    (Color::Red, 6),
    (Color::Orange, 6),
    (Color::Yellow, 6),
    (Color::Green, 6),
    (Color::Blue, 6),
    (Color::Indigo, 6),
    (Color::Violet, 6),
    (Color::Black, 6),
    (Color::White, 8),
];

/// Размер колоды: одна карта на каждую цветовую единицу (7 * 6 + 6 + 8 = 56).
pub const DECK_SIZE: usize = color_unit_total();

const fn color_unit_total() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < COLOR_DISTRIBUTION.len() {
        total += COLOR_DISTRIBUTION[i].1;
        i += 1;
    }
    total
}

/// Колода. Верх колоды: последний элемент вектора.
/// Перемешивание и сборку делает engine (deck_builder), НЕ здесь.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Плоский список цветовых единиц в порядке `COLOR_DISTRIBUTION`
    /// (одинаковые цвета идут подряд).
    pub fn color_units() -> Vec<Color> {
        COLOR_DISTRIBUTION
            .iter()
            .flat_map(|&(color, count)| std::iter::repeat(color).take(count))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять ровно n карт сверху. Если карт не хватает, колода не меняется.
    pub fn draw_exact(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        let split_at = self.cards.len() - n;
        let mut taken = self.cards.split_off(split_at);
        // Порядок "сняли верхнюю, потом следующую".
        taken.reverse();
        Some(taken)
    }
}
