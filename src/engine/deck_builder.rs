//! Сборка колоды двусторонних карт.
//!
//! 1. Плоский список цветовых единиц по `COLOR_DISTRIBUTION`.
//! 2. Лицевые стороны берутся из списка как есть, рубашки из независимо перемешанной копии.
//! 3. Совпадения лицо == рубашка разводим обменом рубашек.
//! 4. Склеиваем по индексу и ещё раз перемешиваем всю колоду (Fisher-Yates).

use tracing::debug;

use crate::domain::card::{Card, CardId};
use crate::domain::color::Color;
use crate::domain::deck::Deck;
use crate::engine::RandomSource;

/// Собрать и перемешать колоду. Ни у одной карты лицо не совпадает с рубашкой.
pub fn build_deck<R: RandomSource>(rng: &mut R) -> Deck {
    let fronts = Deck::color_units();
    let mut backs = fronts.clone();
    rng.shuffle(&mut backs);

    if !resolve_collisions(&fronts, &mut backs) {
        debug!("обмен рубашек не развёл совпадения, берём сдвинутый список");
        backs = rotated_backs(&fronts);
    }

    let mut cards: Vec<Card> = fronts
        .iter()
        .zip(backs.iter())
        .enumerate()
        .map(|(id, (&front, &back))| Card::new(id as CardId, front, back))
        .collect();

    rng.shuffle(&mut cards);

    Deck::new(cards)
}

/// Развести совпадения на месте. `false`: нашлась позиция без безопасной пары для обмена.
fn resolve_collisions(fronts: &[Color], backs: &mut [Color]) -> bool {
    for i in 0..backs.len() {
        if fronts[i] != backs[i] {
            continue;
        }
        match find_swap_partner(fronts, backs, i) {
            Some(j) => backs.swap(i, j),
            None => return false,
        }
    }
    true
}

/// Ищем j сначала вперёд от i, потом назад, так чтобы после обмена
/// ни пара i, ни пара j не совпадали.
fn find_swap_partner(fronts: &[Color], backs: &[Color], i: usize) -> Option<usize> {
    (i + 1..backs.len())
        .chain((0..i).rev())
        .find(|&j| backs[j] != fronts[i] && backs[i] != fronts[j])
}

/// Запасной вариант: рубашки = лица, сдвинутые на размер самой большой группы.
///
/// Лица сгруппированы по цветам, и ни один цвет не занимает больше половины колоды,
/// поэтому позиции i и i + k никогда не попадают в одну группу.
fn rotated_backs(fronts: &[Color]) -> Vec<Color> {
    let largest_group = Color::ALL
        .iter()
        .map(|&c| fronts.iter().filter(|&&f| f == c).count())
        .max()
        .unwrap_or(0);

    let mut backs = fronts.to_vec();
    if !backs.is_empty() {
        let shift = largest_group % backs.len();
        backs.rotate_left(shift);
    }
    backs
}
