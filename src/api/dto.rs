use serde::{Deserialize, Serialize};

use crate::domain::card::CardId;
use crate::domain::color::Color;
use crate::domain::game::{GamePhase, GameState, RoundEndReason, TurnState};
use crate::domain::PlayerId;
use crate::engine::positions::other_index;

/// Карта в руке, как её видит наблюдатель (одна грань).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandCardDto {
    pub card_id: CardId,
    pub color: Color,
}

/// Карта в общем ряду. При `color == None` карта перевёрнута.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RowCardDto {
    pub card_id: CardId,
    pub color: Option<Color>,
}

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub player_id: PlayerId,
    pub name: String,
    pub score: usize,
    /// Для "героя" лицевые грани его карт, для соперника рубашки,
    /// которые смотрят на героя.
    pub hand: Vec<HandCardDto>,
}

/// Вид партии для одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameViewDto {
    pub phase: GamePhase,
    pub turn_state: TurnState,
    pub round_number: u32,
    pub me: PlayerDto,
    pub opponent: PlayerDto,
    pub is_my_turn: bool,
    pub played_cards_this_turn: usize,
    pub turn_timer: u32,
    pub deck_size: usize,
    pub center_row: Vec<RowCardDto>,
    pub round_end_reason: Option<RoundEndReason>,
    pub duplicate_color: Option<Color>,
    pub round_winner_id: Option<PlayerId>,
    pub game_winner_id: Option<PlayerId>,
    pub is_tie: bool,
    pub last_action_log: String,
}

impl GameViewDto {
    /// Построить вид для игрока `viewer`. None, если такого игрока в партии нет
    /// (или партия ещё в лобби без двух игроков).
    pub fn for_player(state: &GameState, viewer: &str) -> Option<Self> {
        let me_idx = state.player_index(viewer)?;
        let me = &state.players[me_idx];
        let opponent = state.players.get(other_index(me_idx))?;

        let me_dto = PlayerDto {
            player_id: me.id.clone(),
            name: me.name.clone(),
            score: me.score(),
            hand: me
                .hand
                .iter()
                .map(|c| HandCardDto {
                    card_id: c.id,
                    color: c.front_color,
                })
                .collect(),
        };

        let opponent_dto = PlayerDto {
            player_id: opponent.id.clone(),
            name: opponent.name.clone(),
            score: opponent.score(),
            hand: opponent
                .hand
                .iter()
                .map(|c| HandCardDto {
                    card_id: c.id,
                    color: c.back_color,
                })
                .collect(),
        };

        Some(Self {
            phase: state.phase,
            turn_state: state.turn_state,
            round_number: state.round_number,
            me: me_dto,
            opponent: opponent_dto,
            is_my_turn: state.current_player_index == me_idx,
            played_cards_this_turn: state.played_cards_this_turn,
            turn_timer: state.turn_timer,
            deck_size: state.deck.len(),
            center_row: state
                .center_row
                .iter()
                .map(|c| RowCardDto {
                    card_id: c.card.id,
                    color: c.visible_color(),
                })
                .collect(),
            round_end_reason: state.round_end_reason,
            duplicate_color: state.duplicate_color,
            round_winner_id: state.round_winner_id.clone(),
            game_winner_id: state.game_winner_id.clone(),
            is_tie: state.is_tie,
            last_action_log: state.last_action_log.clone(),
        })
    }
}
