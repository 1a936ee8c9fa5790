//! Конец партии: колода не может закрыть обязательный добор.

use tracing::info;

use crate::domain::game::{GamePhase, GameState};
use crate::domain::player::Player;
use crate::domain::PlayerId;
use crate::engine::events::GameEvent;

/// Итог партии.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Tie,
}

/// Сравнить стопки: у кого строго больше карт, тот и выиграл.
pub fn decide_outcome(first: &Player, second: &Player) -> GameOutcome {
    match first.score().cmp(&second.score()) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(first.id.clone()),
        std::cmp::Ordering::Less => GameOutcome::Winner(second.id.clone()),
        std::cmp::Ordering::Equal => GameOutcome::Tie,
    }
}

/// Заморозить партию: фаза GAME_OVER, победитель или ничья.
/// После этого допустим только RESTART_GAME.
pub(crate) fn finish_game(state: &mut GameState) -> GameOutcome {
    let outcome = match state.players.as_slice() {
        [first, second] => decide_outcome(first, second),
        _ => GameOutcome::Tie,
    };

    state.phase = GamePhase::GameOver;
    match &outcome {
        GameOutcome::Winner(id) => {
            state.game_winner_id = Some(id.clone());
            state.is_tie = false;
        }
        GameOutcome::Tie => {
            state.game_winner_id = None;
            state.is_tie = true;
        }
    }

    let winner_name = match &outcome {
        GameOutcome::Winner(id) => state.player_by_id(id).map(|p| p.name.clone()),
        GameOutcome::Tie => None,
    };
    let scores: Vec<usize> = state.players.iter().map(Player::score).collect();
    info!(?outcome, ?scores, "партия окончена");

    state.last_action_log = GameEvent::GameOver {
        winner: winner_name,
        scores,
    }
    .to_string();

    outcome
}
