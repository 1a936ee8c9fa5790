use thiserror::Error;

use crate::domain::PlayerId;

/// Фатальные ошибки движка: битые входные данные при создании партии
/// и ошибки разбора снапшотов. Это ошибка программиста выше по стеку, а не игровое событие.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Нужно ровно 2 игрока, получено {0}")]
    WrongPlayerCount(usize),

    #[error("У игрока №{0} пустой id")]
    MissingPlayerId(usize),

    #[error("У игрока {0} пустое имя")]
    MissingPlayerName(PlayerId),

    #[error("Игрок {0} указан дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(&'static str),

    #[error("Ошибка JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Почему действие было проигнорировано.
///
/// `reduce` глотает эти ошибки и возвращает состояние без изменений,
/// `apply_action` отдаёт их наружу (для тестов и логов).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionRejected {
    #[error("Партия не идёт")]
    GameNotInProgress,

    #[error("Раунд уже закончен")]
    RoundOver,

    #[error("Раунд ещё не закончен")]
    RoundNotOver,

    #[error("За ход уже сыграно {0} карт")]
    PlayLimitReached(usize),

    #[error("В руке нет карты с индексом {index} (карт в руке: {hand_len})")]
    HandIndexOutOfRange { index: usize, hand_len: usize },

    #[error("В партии должно быть ровно 2 игрока")]
    InvalidRoster,

    #[error("Таймер хода сейчас не идёт")]
    TimerNotRunning,

    #[error("Не удалось перезапустить партию: {0}")]
    RestartFailed(String),
}
