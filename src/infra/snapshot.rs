//! JSON-снапшоты для хоста, который гоняет состояние через удалённое хранилище.

use crate::domain::GameState;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;

pub fn state_to_json(state: &GameState) -> Result<String, EngineError> {
    Ok(serde_json::to_string(state)?)
}

pub fn state_from_json(json: &str) -> Result<GameState, EngineError> {
    Ok(serde_json::from_str(json)?)
}

/// Разобрать действие, пришедшее от UI / слоя синхронизации.
pub fn action_from_json(json: &str) -> Result<Action, EngineError> {
    Ok(serde_json::from_str(json)?)
}
