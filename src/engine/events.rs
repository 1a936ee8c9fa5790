use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::color::Color;
use crate::domain::game::RoundEndReason;
use crate::engine::row::RoundEnd;

/// Событие перехода. Текстовое представление уходит в `GameState::last_action_log`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEvent {
    /// Новая партия началась.
    GameStarted { first: String, game_number: u64 },

    /// Игрок открыл карту в ряду.
    CardPlayed {
        player: String,
        color: Color,
        blind: bool,
        round_end: Option<RoundEndReason>,
    },

    /// Пас: весь ряд перевёрнут.
    Passed { player: String, flipped: usize },

    /// Ход закончен добором.
    TurnEnded { player: String, drew: usize },

    /// Время хода вышло.
    TimedOut { player: String },

    /// Ряд ушёл победителю раунда.
    RoundResolved {
        winner: String,
        cards: usize,
        starter: String,
    },

    /// Партия окончена (None означает ничью).
    GameOver {
        winner: Option<String>,
        scores: Vec<usize>,
    },
}

impl GameEvent {
    pub fn card_played(player: &str, color: Color, blind: bool, round_end: Option<RoundEnd>) -> Self {
        GameEvent::CardPlayed {
            player: player.to_string(),
            color,
            blind,
            round_end: round_end.map(|end| end.reason),
        }
    }
}

impl fmt::Display for RoundEndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RoundEndReason::DuplicateColor => "цвет повторился",
            RoundEndReason::BlackCard => "открыта чёрная карта",
            RoundEndReason::RainbowComplete => "радуга собрана",
        };
        write!(f, "{text}")
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::GameStarted { first, game_number } => {
                write!(f, "Партия №{} началась. Первым ходит {first}.", game_number + 1)
            }
            GameEvent::CardPlayed {
                player,
                color,
                blind,
                round_end,
            } => {
                let how = if *blind { " вслепую" } else { "" };
                write!(f, "{player} открывает {color}{how}.")?;
                if let Some(reason) = round_end {
                    write!(f, " Раунд окончен: {reason}.")?;
                }
                Ok(())
            }
            GameEvent::Passed { player, flipped } => {
                write!(f, "{player} пасует и переворачивает ряд ({flipped} карт).")
            }
            GameEvent::TurnEnded { player, drew } => {
                write!(f, "{player} заканчивает ход и добирает {drew} карт.")
            }
            GameEvent::TimedOut { player } => write!(f, "У {player} вышло время."),
            GameEvent::RoundResolved {
                winner,
                cards,
                starter,
            } => write!(
                f,
                "{winner} забирает ряд ({cards} карт). Новый раунд начинает {starter}."
            ),
            GameEvent::GameOver { winner, scores } => {
                let scores = scores
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(":");
                match winner {
                    Some(name) => write!(f, "Колода кончилась. Побеждает {name} ({scores})."),
                    None => write!(f, "Колода кончилась. Ничья ({scores})."),
                }
            }
        }
    }
}
