//! Тесты границ раунда и партии:
//! - радуга на шестом открытом цвете;
//! - кто забирает ряд и кто начинает следующий раунд;
//! - сохранение числа карт на длинных случайных партиях;
//! - RESTART_GAME.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arcoiris_engine::domain::{
    Card, Color, Deck, GamePhase, GameState, PlayerProfile, RoundEndReason, TurnState, DECK_SIZE,
};
use arcoiris_engine::engine::{apply_action, new_game, reduce, Action, ActionRejected};
use arcoiris_engine::{GameConfig, RngSeed};

fn fresh_game(seed: u64) -> GameState {
    new_game(
        vec![PlayerProfile::new("a", "Ана"), PlayerProfile::new("b", "Борис")],
        GameConfig::default(),
        RngSeed::from_u64(seed),
    )
    .expect("valid game")
}

fn filler(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(100 + i as u8, Color::White, Color::Black))
        .collect()
}

fn scripted(hand_a: Vec<Card>, hand_b: Vec<Card>) -> GameState {
    let mut state = fresh_game(3);
    state.current_player_index = 0;
    state.players[0].hand = hand_a;
    state.players[1].hand = hand_b;
    state.deck = Deck::new(filler(20));
    state
}

fn play(state: GameState, hand_index: usize) -> GameState {
    reduce(state, Action::PlayCard { hand_index, is_blind: false })
}

#[test]
fn rainbow_completes_on_sixth_reveal_and_opponent_starts_next() {
    let state = scripted(
        vec![
            Card::new(0, Color::Red, Color::Black),
            Card::new(1, Color::Orange, Color::Black),
            Card::new(2, Color::Yellow, Color::Black),
        ],
        vec![
            Card::new(3, Color::Green, Color::Black),
            Card::new(4, Color::Blue, Color::Black),
            Card::new(5, Color::Indigo, Color::Black),
        ],
    );

    let state = play(play(play(state, 0), 0), 0);
    let state = reduce(state, Action::EndTurn);
    assert_eq!(state.current_player_index, 1);

    let state = play(play(state, 0), 0);
    assert_eq!(state.turn_state, TurnState::Playing);

    let state = play(state, 0);
    assert_eq!(state.turn_state, TurnState::RoundOver);
    assert_eq!(state.round_end_reason, Some(RoundEndReason::RainbowComplete));

    let next = reduce(state, Action::StartNextRound);
    assert_eq!(next.round_winner_id.as_deref(), Some("b"));
    assert_eq!(next.players[1].score(), 6);
    assert!(next.players[1].discard_pile.iter().all(|c| c.is_face_up));
    assert_eq!(next.current_player_index, 0, "opponent of the rainbow maker starts");
    assert!(next.center_row.is_empty());
    assert_eq!(next.turn_state, TurnState::Playing);
    assert_eq!(next.round_end_reason, None);
    assert_eq!(next.played_cards_this_turn, 0);
    assert_eq!(next.round_number, 2);
    assert!(next.players.iter().all(|p| p.hand.len() == 3));
}

#[test]
fn duplicate_loser_starts_next_round() {
    let state = scripted(
        vec![
            Card::new(0, Color::Red, Color::White),
            Card::new(1, Color::Red, Color::White),
        ],
        filler(3),
    );

    let over = play(play(state, 0), 0);
    assert_eq!(over.round_end_reason, Some(RoundEndReason::DuplicateColor));

    let next = reduce(over, Action::StartNextRound);
    assert_eq!(next.round_winner_id.as_deref(), Some("b"));
    assert_eq!(next.players[1].score(), 2);
    assert_eq!(next.players[0].score(), 0);
    assert_eq!(next.current_player_index, 0, "the player who exposed the bad card acts first");
}

#[test]
fn black_card_loser_starts_next_round() {
    let mut state = scripted(filler(3), vec![Card::new(0, Color::Green, Color::Black)]);
    state.current_player_index = 1;

    let over = reduce(state, Action::PlayCard { hand_index: 0, is_blind: true });
    assert_eq!(over.round_end_reason, Some(RoundEndReason::BlackCard));

    let next = reduce(over, Action::StartNextRound);
    assert_eq!(next.round_winner_id.as_deref(), Some("a"));
    assert_eq!(next.players[0].score(), 1);
    assert_eq!(next.current_player_index, 1);
    assert_eq!(next.turn_timer, 60);
}

/// Случайное допустимое (или нет, редьюсер разберётся) действие.
fn random_action(state: &GameState, rng: &mut StdRng) -> Action {
    match rng.gen_range(0..12) {
        0 => Action::TickTimer,
        1 => Action::StartNextRound,
        2 | 3 => Action::EndTurn,
        4 => Action::PlayCard {
            hand_index: rng.gen_range(0..5),
            is_blind: rng.gen_bool(0.5),
        },
        _ => {
            let hand_len = state.current_player().map(|p| p.hand.len()).unwrap_or(1).max(1);
            Action::PlayCard {
                hand_index: rng.gen_range(0..hand_len),
                is_blind: rng.gen_bool(0.3),
            }
        }
    }
}

#[test]
fn cards_are_conserved_across_random_games() {
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = fresh_game(seed);
        assert_eq!(state.total_cards(), DECK_SIZE);

        for _ in 0..2_000 {
            if state.phase == GamePhase::GameOver {
                break;
            }
            let action = random_action(&state, &mut rng);
            state = reduce(state, action);
            assert_eq!(state.total_cards(), DECK_SIZE, "seed {seed}");
            assert!(state.played_cards_this_turn <= 3);
            assert!(state.players.iter().all(|p| p.hand.len() <= 3));
        }
    }
}

#[test]
fn restart_deals_a_fresh_game_for_the_same_players() {
    let mut state = scripted(
        vec![
            Card::new(0, Color::Red, Color::White),
            Card::new(1, Color::Red, Color::White),
        ],
        filler(3),
    );
    state = play(play(state, 0), 0);
    state = reduce(state, Action::StartNextRound);
    assert_eq!(state.players[1].score(), 2);

    let restarted = reduce(state.clone(), Action::RestartGame);
    assert_eq!(restarted.phase, GamePhase::Playing);
    assert_eq!(restarted.game_number, state.game_number + 1);
    assert_eq!(restarted.round_number, 1);
    assert_eq!(restarted.total_cards(), DECK_SIZE);
    assert!(restarted.players.iter().all(|p| p.score() == 0 && p.hand.len() == 3));
    assert_eq!(restarted.players[0].id, "a");
    assert_eq!(restarted.players[1].name, "Борис");

    // Рестарт детерминирован, но колода новая.
    assert_eq!(reduce(state.clone(), Action::RestartGame), restarted);
    assert_ne!(restarted.deck, fresh_game(3).deck);
}

#[test]
fn first_player_is_drawn_by_lot() {
    let mut starters = BTreeSet::new();
    for seed in 0..50 {
        let state = fresh_game(seed);
        assert_eq!(state, fresh_game(seed), "lot is part of the seeded game");
        starters.insert(state.current_player_index);

        let restarted = reduce(state, Action::RestartGame);
        starters.insert(restarted.current_player_index);
    }
    assert_eq!(starters, BTreeSet::from([0, 1]));
}

#[test]
fn restart_needs_two_players() {
    let mut state = fresh_game(1);
    state.players.truncate(1);
    assert_eq!(
        apply_action(&state, Action::RestartGame),
        Err(ActionRejected::InvalidRoster)
    );
}
