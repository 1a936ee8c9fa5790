// src/bin/arcoiris_dev_cli.rs
//
// Самоигра двух "случайных" игроков через редьюсер.
// Запуск: arcoiris_dev_cli [seed]
// Уровень логов: RUST_LOG (по умолчанию info).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use arcoiris_engine::domain::{GamePhase, GameState, PlayerProfile};
use arcoiris_engine::engine::{new_game, reduce, Action};
use arcoiris_engine::{GameConfig, RngSeed};

/// Ограничение на число действий, чтобы CLI никогда не зациклился.
const MAX_STEPS: usize = 5_000;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    println!("=== ARCOÍRIS TÁCTICO DEV CLI (seed={seed}) ===\n");

    let profiles = vec![
        PlayerProfile::new("p1", "Ана"),
        PlayerProfile::new("p2", "Борис"),
    ];

    let mut state = match new_game(profiles, GameConfig::default(), RngSeed::from_u64(seed)) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Не удалось создать партию: {err}");
            std::process::exit(1);
        }
    };
    println!("{}", state.last_action_log);

    let mut policy = StdRng::seed_from_u64(seed);

    for step in 0..MAX_STEPS {
        if state.phase == GamePhase::GameOver {
            break;
        }

        let action = choose_action(&state, &mut policy);
        let before = state.last_action_log.clone();
        state = reduce(state, action);

        if state.last_action_log != before {
            println!("[{step:>4}] {}", state.last_action_log);
        }
    }

    println!("\n=== ИТОГ ===");
    for p in &state.players {
        println!("  {:<8} {} карт", p.name, p.score());
    }
    println!("  Карт в игре: {}", state.total_cards());
}

/// Случайная, но разумная политика: чаще играем карту, иногда пасуем,
/// изредка "думаем" (тик таймера).
fn choose_action(state: &GameState, rng: &mut StdRng) -> Action {
    if state.round_end_reason.is_some() {
        return Action::StartNextRound;
    }

    let hand_len = state
        .current_player()
        .map(|p| p.hand.len())
        .unwrap_or(0);
    let can_play = hand_len > 0 && state.played_cards_this_turn < state.config.max_plays_per_turn;

    match rng.gen_range(0..10) {
        0 => Action::TickTimer,
        1..=6 if can_play => Action::PlayCard {
            hand_index: rng.gen_range(0..hand_len),
            is_blind: rng.gen_bool(0.3),
        },
        _ => Action::EndTurn,
    }
}
