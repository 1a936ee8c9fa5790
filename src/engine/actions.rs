use serde::{Deserialize, Serialize};

use crate::domain::GameState;

/// Действие, которое хост (UI или слой синхронизации) отправляет в редьюсер.
///
/// В JSON это тегированный union:
/// `{"type":"PLAY_CARD","handIndex":0,"isBlind":false}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Безусловно заменить состояние снапшотом извне. Без проверок.
    SetGameState { payload: Box<GameState> },
    /// Сыграть карту из руки текущего игрока.
    #[serde(rename_all = "camelCase")]
    PlayCard { hand_index: usize, is_blind: bool },
    /// Закончить ход (добор карт или пас).
    EndTurn,
    /// Разыграть итог раунда и начать следующий.
    StartNextRound,
    /// Новая партия с теми же двумя игроками.
    RestartGame,
    /// Прошла секунда хода.
    TickTimer,
}

impl Action {
    /// Короткое имя для логов.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetGameState { .. } => "SET_GAME_STATE",
            Action::PlayCard { .. } => "PLAY_CARD",
            Action::EndTurn => "END_TURN",
            Action::StartNextRound => "START_NEXT_ROUND",
            Action::RestartGame => "RESTART_GAME",
            Action::TickTimer => "TICK_TIMER",
        }
    }
}
