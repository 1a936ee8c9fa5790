//! Проверка общего ряда после каждой открытой карты.
//!
//! Смотрим только карты лицом вверх. Перевёрнутые (после паса) ни на что не влияют.

use std::collections::BTreeSet;

use crate::domain::card::CenterRowCard;
use crate::domain::color::Color;
use crate::domain::game::RoundEndReason;

/// Что видно в ряду.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStatus {
    Valid,
    BlackCard,
    DuplicateColor(Color),
}

/// Итог раунда, если ряд его закончил.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundEnd {
    pub reason: RoundEndReason,
    /// Повторившийся цвет (только для DUPLICATE_COLOR).
    pub color: Option<Color>,
}

/// Проверка ряда на проигрышные условия.
///
/// Чёрная грань важнее повтора: сначала ищем её во всём ряду,
/// потом повторы среди не-белых цветов. Белый безопасен всегда.
pub fn scan_row(row: &[CenterRowCard]) -> RowStatus {
    let mut visible = row.iter().filter_map(CenterRowCard::visible_color);

    if visible.clone().any(Color::is_hazard) {
        return RowStatus::BlackCard;
    }

    let mut seen = BTreeSet::new();
    visible
        .find(|&color| !color.is_safe() && !seen.insert(color))
        .map_or(RowStatus::Valid, RowStatus::DuplicateColor)
}

/// Сколько разных цветов радуги открыто в ряду.
pub fn distinct_rainbow_colors(row: &[CenterRowCard]) -> usize {
    row.iter()
        .filter_map(CenterRowCard::visible_color)
        .filter(|c| c.is_rainbow())
        .collect::<BTreeSet<_>>()
        .len()
}

pub fn is_rainbow_complete(row: &[CenterRowCard], target: usize) -> bool {
    distinct_rainbow_colors(row) >= target
}

/// Полная оценка ряда после открытия карты. None, если раунд продолжается.
pub fn evaluate_row(row: &[CenterRowCard], rainbow_target: usize) -> Option<RoundEnd> {
    match scan_row(row) {
        RowStatus::BlackCard => Some(RoundEnd {
            reason: RoundEndReason::BlackCard,
            color: None,
        }),
        RowStatus::DuplicateColor(color) => Some(RoundEnd {
            reason: RoundEndReason::DuplicateColor,
            color: Some(color),
        }),
        RowStatus::Valid if is_rainbow_complete(row, rainbow_target) => Some(RoundEnd {
            reason: RoundEndReason::RainbowComplete,
            color: None,
        }),
        RowStatus::Valid => None,
    }
}
