// src/time_ctrl/time_rules.rs
//! Конфигурация таймера хода.
//!
//! Здесь описываем только "правила", без состояния и без привязки к конкретной партии.

use serde::{Deserialize, Serialize};

/// Профиль тайминга.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeProfile {
    /// 60 секунд на ход.
    Standard,
    /// 20 секунд на ход.
    Blitz,
}

/// Правила тайминга для одной партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRules {
    /// Сколько секунд даётся на ход. По истечении ход завершается принудительно.
    pub turn_secs: u32,
}

impl TimeRules {
    pub const fn new(turn_secs: u32) -> Self {
        Self { turn_secs }
    }

    pub const fn standard() -> Self {
        Self { turn_secs: 60 }
    }

    /// Получить правила по профилю.
    pub const fn from_profile(profile: TimeProfile) -> Self {
        match profile {
            TimeProfile::Standard => Self::standard(),
            TimeProfile::Blitz => Self::new(20),
        }
    }
}

impl Default for TimeRules {
    fn default() -> Self {
        Self::standard()
    }
}
