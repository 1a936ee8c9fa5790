use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CenterRowCard};
use crate::domain::PlayerId;

/// Профиль игрока, который приходит от хоста (лобби / авторизация).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerProfile {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Состояние игрока в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Рука (до `hand_size` карт). Порядок ничего не значит, играть можно любую.
    pub hand: Vec<Card>,
    /// Выигранные карты. Размер стопки = очки игрока.
    pub discard_pile: Vec<CenterRowCard>,
}

impl Player {
    pub fn new(profile: PlayerProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            hand: Vec::new(),
            discard_pile: Vec::new(),
        }
    }

    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile::new(self.id.clone(), self.name.clone())
    }

    pub fn score(&self) -> usize {
        self.discard_pile.len()
    }

    /// Сколько карт не хватает до полной руки.
    pub fn cards_missing(&self, hand_size: usize) -> usize {
        hand_size.saturating_sub(self.hand.len())
    }
}
