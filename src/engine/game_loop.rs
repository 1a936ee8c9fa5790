use tracing::{debug, info};

use crate::domain::card::CenterRowCard;
use crate::domain::config::GameConfig;
use crate::domain::game::{GamePhase, GameState, TurnState};
use crate::domain::player::{Player, PlayerProfile};
use crate::engine::actions::Action;
use crate::engine::deck_builder::build_deck;
use crate::engine::errors::{ActionRejected, EngineError};
use crate::engine::events::GameEvent;
use crate::engine::game_over::finish_game;
use crate::engine::positions::{draw_first_seat, other_index, round_seats, PLAYER_COUNT};
use crate::engine::row::evaluate_row;
use crate::infra::rng_seed::RngSeed;
use crate::time_ctrl::{tick, TimeoutState};

/// Старт новой партии:
/// - проверяет игроков и конфиг;
/// - собирает колоду из seed партии;
/// - раздаёт стартовые руки;
/// - жребием выбирает, кто ходит первым.
pub fn new_game(
    profiles: Vec<PlayerProfile>,
    config: GameConfig,
    seed: RngSeed,
) -> Result<GameState, EngineError> {
    start_game(profiles, config, seed, 0)
}

fn start_game(
    profiles: Vec<PlayerProfile>,
    config: GameConfig,
    seed: RngSeed,
    game_number: u64,
) -> Result<GameState, EngineError> {
    validate_roster(&profiles)?;
    config.validate()?;

    let mut rng = seed.derive(game_number).to_rng();
    let mut deck = build_deck(&mut rng);
    let starter = draw_first_seat(&mut rng);

    let mut players: Vec<Player> = profiles.into_iter().map(Player::new).collect();

    // Раздаём по одной карте по кругу, начиная с игрока 0 (от жребия не зависит).
    for _round in 0..config.hand_size {
        for player in players.iter_mut() {
            if let Some(card) = deck.draw_one() {
                player.hand.push(card);
            }
        }
    }

    let first = players[starter].name.clone();
    info!(game_number, starter, first = %first, "новая партия");

    let mut state = GameState::lobby(config, seed);
    state.phase = GamePhase::Playing;
    state.players = players;
    state.deck = deck;
    state.current_player_index = starter;
    state.round_number = 1;
    state.game_number = game_number;
    state.last_action_log = GameEvent::GameStarted { first, game_number }.to_string();

    Ok(state)
}

fn validate_roster(profiles: &[PlayerProfile]) -> Result<(), EngineError> {
    if profiles.len() != PLAYER_COUNT {
        return Err(EngineError::WrongPlayerCount(profiles.len()));
    }
    for (idx, profile) in profiles.iter().enumerate() {
        if profile.id.trim().is_empty() {
            return Err(EngineError::MissingPlayerId(idx));
        }
        if profile.name.trim().is_empty() {
            return Err(EngineError::MissingPlayerName(profile.id.clone()));
        }
    }
    if profiles[0].id == profiles[1].id {
        return Err(EngineError::DuplicatePlayer(profiles[0].id.clone()));
    }
    Ok(())
}

/// Главный редьюсер: (состояние, действие) -> новое состояние.
///
/// Недопустимое действие не ломает партию: возвращается входное состояние как есть.
pub fn reduce(state: GameState, action: Action) -> GameState {
    let name = action.name();
    match apply_action(&state, action) {
        Ok(next) => next,
        Err(reason) => {
            debug!(action = name, %reason, "действие проигнорировано");
            state
        }
    }
}

/// Применить действие. В отличие от `reduce`, сообщает, почему действие отклонено.
pub fn apply_action(state: &GameState, action: Action) -> Result<GameState, ActionRejected> {
    match action {
        Action::SetGameState { payload } => Ok(*payload),
        Action::PlayCard {
            hand_index,
            is_blind,
        } => play_card(state, hand_index, is_blind),
        Action::EndTurn => end_turn(state),
        Action::StartNextRound => start_next_round(state),
        Action::RestartGame => restart_game(state),
        Action::TickTimer => tick_timer(state),
    }
}

fn ensure_roster(state: &GameState) -> Result<(), ActionRejected> {
    if state.players.len() == PLAYER_COUNT && state.current_player_index < PLAYER_COUNT {
        Ok(())
    } else {
        Err(ActionRejected::InvalidRoster)
    }
}

/// Ход открыт: партия идёт, раунд не закончен.
fn ensure_turn_open(state: &GameState) -> Result<(), ActionRejected> {
    if state.phase != GamePhase::Playing {
        return Err(ActionRejected::GameNotInProgress);
    }
    ensure_roster(state)?;
    if state.turn_state == TurnState::RoundOver {
        return Err(ActionRejected::RoundOver);
    }
    Ok(())
}

fn play_card(
    state: &GameState,
    hand_index: usize,
    is_blind: bool,
) -> Result<GameState, ActionRejected> {
    ensure_turn_open(state)?;

    if state.played_cards_this_turn >= state.config.max_plays_per_turn {
        return Err(ActionRejected::PlayLimitReached(state.played_cards_this_turn));
    }

    let hand_len = state.players[state.current_player_index].hand.len();
    if hand_index >= hand_len {
        return Err(ActionRejected::HandIndexOutOfRange {
            index: hand_index,
            hand_len,
        });
    }

    let mut next = state.clone();
    let actor = next.current_player_index;

    let card = next.players[actor].hand.remove(hand_index);
    let row_card = CenterRowCard::played(card, is_blind);
    next.center_row.push(row_card);
    next.played_cards_this_turn += 1;

    let round_end = evaluate_row(&next.center_row, next.config.rainbow_target);
    if let Some(end) = round_end {
        next.turn_state = TurnState::RoundOver;
        next.round_end_reason = Some(end.reason);
        next.duplicate_color = end.color;
        info!(
            player = %next.players[actor].id,
            reason = ?end.reason,
            round = next.round_number,
            "раунд окончен"
        );
    }

    next.last_action_log = GameEvent::card_played(
        &next.players[actor].name,
        row_card.card.front_color,
        is_blind,
        round_end,
    )
    .to_string();

    Ok(next)
}

fn end_turn(state: &GameState) -> Result<GameState, ActionRejected> {
    ensure_turn_open(state)?;

    let mut next = state.clone();
    finish_turn(&mut next);
    Ok(next)
}

/// Завершение хода (и по END_TURN, и по таймауту).
///
/// Сыграл карты: добирает ровно столько же; если колода не может их дать,
/// партия заканчивается без частичного добора.
/// Не сыграл ничего: пас, весь ряд переворачивается рубашкой вверх.
/// Ход переходит к сопернику в любом случае, в том числе перед концом партии.
fn finish_turn(next: &mut GameState) {
    let actor = next.current_player_index;
    let played = next.played_cards_this_turn;
    let player = next.players[actor].name.clone();

    let event = if played > 0 {
        next.deck.draw_exact(played).map(|cards| {
            next.players[actor].hand.extend(cards);
            GameEvent::TurnEnded {
                player,
                drew: played,
            }
        })
    } else {
        let flipped = next.center_row.iter().filter(|c| c.is_face_up).count();
        for row_card in next.center_row.iter_mut() {
            *row_card = row_card.face_down();
        }
        Some(GameEvent::Passed { player, flipped })
    };

    next.current_player_index = other_index(actor);
    next.played_cards_this_turn = 0;
    next.turn_timer = next.config.time.turn_secs;

    match event {
        Some(event) => next.last_action_log = event.to_string(),
        None => {
            debug!(needed = played, left = next.deck.len(), "колода не закрывает добор");
            finish_game(next);
        }
    }
}

fn start_next_round(state: &GameState) -> Result<GameState, ActionRejected> {
    if state.phase != GamePhase::Playing {
        return Err(ActionRejected::GameNotInProgress);
    }
    let reason = state.round_end_reason.ok_or(ActionRejected::RoundNotOver)?;
    ensure_roster(state)?;

    let mut next = state.clone();
    let seats = round_seats(next.current_player_index, reason);

    // Ряд уходит победителю, все карты теперь общеизвестны.
    let won: Vec<CenterRowCard> = next
        .center_row
        .drain(..)
        .map(CenterRowCard::face_up)
        .collect();
    let cards = won.len();
    next.players[seats.winner].discard_pile.extend(won);
    next.round_winner_id = Some(next.players[seats.winner].id.clone());

    next.current_player_index = seats.starter;
    next.played_cards_this_turn = 0;
    next.turn_state = TurnState::Playing;
    next.round_end_reason = None;
    next.duplicate_color = None;
    next.turn_timer = next.config.time.turn_secs;

    info!(
        winner = %next.players[seats.winner].id,
        cards,
        starter = %next.players[seats.starter].id,
        "ряд разыгран"
    );

    if !refill_hands(&mut next, seats.starter) {
        finish_game(&mut next);
        return Ok(next);
    }

    next.round_number += 1;
    next.last_action_log = GameEvent::RoundResolved {
        winner: next.players[seats.winner].name.clone(),
        cards,
        starter: next.players[seats.starter].name.clone(),
    }
    .to_string();

    Ok(next)
}

/// Добрать обоим игрокам до полной руки, начиная с того, кто начинает раунд.
/// Если колоды не хватает на обоих, не берём ничего и возвращаем false.
fn refill_hands(state: &mut GameState, starter: usize) -> bool {
    let hand_size = state.config.hand_size;
    let order = [starter, other_index(starter)];

    let needed: usize = order
        .iter()
        .map(|&idx| state.players[idx].cards_missing(hand_size))
        .sum();
    if state.deck.len() < needed {
        debug!(needed, left = state.deck.len(), "колода не закрывает раздачу");
        return false;
    }

    for idx in order {
        let missing = state.players[idx].cards_missing(hand_size);
        if let Some(cards) = state.deck.draw_exact(missing) {
            state.players[idx].hand.extend(cards);
        }
    }
    true
}

fn restart_game(state: &GameState) -> Result<GameState, ActionRejected> {
    if state.players.len() != PLAYER_COUNT {
        return Err(ActionRejected::InvalidRoster);
    }

    let profiles = state.players.iter().map(Player::profile).collect();
    start_game(
        profiles,
        state.config.clone(),
        state.seed,
        state.game_number + 1,
    )
    .map_err(|err| ActionRejected::RestartFailed(err.to_string()))
}

fn tick_timer(state: &GameState) -> Result<GameState, ActionRejected> {
    if state.phase != GamePhase::Playing || state.turn_state != TurnState::Playing {
        return Err(ActionRejected::TimerNotRunning);
    }
    ensure_roster(state)?;

    let mut next = state.clone();
    match tick(state.turn_timer) {
        TimeoutState::Ongoing { remaining_secs } => {
            next.turn_timer = remaining_secs;
        }
        TimeoutState::TimedOut => {
            let player = next.players[next.current_player_index].name.clone();
            info!(player = %player, "время хода вышло");

            finish_turn(&mut next);
            if !next.is_game_over() {
                next.last_action_log =
                    format!("{} {}", GameEvent::TimedOut { player }, next.last_action_log);
            }
        }
    }
    Ok(next)
}
