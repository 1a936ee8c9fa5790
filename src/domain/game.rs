use serde::{Deserialize, Serialize};

use crate::domain::card::CenterRowCard;
use crate::domain::color::Color;
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::PlayerId;
use crate::engine::positions::other_index;
use crate::infra::rng_seed::RngSeed;

/// Жизненный цикл партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Lobby,
    Playing,
    GameOver,
}

/// Идёт ли раунд или он закончен и ждёт START_NEXT_ROUND.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnState {
    Playing,
    RoundOver,
}

/// Почему закончился раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundEndReason {
    /// Открыт повтор цвета (ходивший проиграл ряд).
    DuplicateColor,
    /// Открыта чёрная грань (ходивший проиграл ряд).
    BlackCard,
    /// Собрана радуга (ходивший выиграл ряд).
    RainbowComplete,
}

impl RoundEndReason {
    /// Забирает ли ряд сам ходивший игрок.
    pub const fn actor_wins(self) -> bool {
        matches!(self, RoundEndReason::RainbowComplete)
    }
}

/// Полное состояние партии — единственный источник истины.
///
/// Меняется только через `engine::reduce` / `engine::apply_action`,
/// каждый переход отдаёт новый снапшот.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub phase: GamePhase,
    pub players: Vec<Player>,
    pub deck: Deck,
    pub center_row: Vec<CenterRowCard>,
    pub current_player_index: usize,
    pub turn_state: TurnState,
    pub played_cards_this_turn: usize,
    pub round_end_reason: Option<RoundEndReason>,
    /// Какой цвет повторился (только для DUPLICATE_COLOR).
    #[serde(default)]
    pub duplicate_color: Option<Color>,
    pub round_winner_id: Option<PlayerId>,
    pub game_winner_id: Option<PlayerId>,
    pub is_tie: bool,
    /// Текст для UI о последнем переходе. Правила на него не опираются.
    pub last_action_log: String,
    /// Сколько секунд осталось на текущий ход.
    pub turn_timer: u32,
    /// Номер раунда внутри партии (с 1).
    #[serde(default)]
    pub round_number: u32,
    /// Номер партии для данного seed (0 для первой, растёт на каждом рестарте).
    #[serde(default)]
    pub game_number: u64,
    #[serde(default)]
    pub seed: RngSeed,
    #[serde(default)]
    pub config: GameConfig,
}

impl GameState {
    /// Пустое лобби: игроков ещё нет, колоды нет.
    pub fn lobby(config: GameConfig, seed: RngSeed) -> Self {
        Self {
            phase: GamePhase::Lobby,
            players: Vec::new(),
            deck: Deck::default(),
            center_row: Vec::new(),
            current_player_index: 0,
            turn_state: TurnState::Playing,
            played_cards_this_turn: 0,
            round_end_reason: None,
            duplicate_color: None,
            round_winner_id: None,
            game_winner_id: None,
            is_tie: false,
            last_action_log: String::new(),
            turn_timer: config.time.turn_secs,
            round_number: 0,
            game_number: 0,
            seed,
            config,
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn opponent(&self) -> Option<&Player> {
        self.players.get(other_index(self.current_player_index))
    }

    pub fn player_by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_index(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn is_round_over(&self) -> bool {
        self.turn_state == TurnState::RoundOver
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Все карты партии: колода + ряд + руки + стопки.
    /// Для корректного состояния всегда равно `DECK_SIZE`.
    pub fn total_cards(&self) -> usize {
        let in_players: usize = self
            .players
            .iter()
            .map(|p| p.hand.len() + p.discard_pile.len())
            .sum();
        self.deck.len() + self.center_row.len() + in_players
    }
}
