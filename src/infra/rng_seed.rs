//! RngSeed — доменный seed партии.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32]) прямо в `GameState`;
//!   - делать детерминированное hash-reseeding на каждую партию:
//!         deck_seed = H(domain || base || game_number)
//!   - создавать DeterministicRng из seed.
//!
//! Благодаря этому RESTART_GAME остаётся чистой функцией состояния.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Случайный seed из энтропии ОС. Для хоста, который создаёт новую партию.
    pub fn random() -> Self {
        Self {
            bytes: rand::random(),
        }
    }

    /// Seed колоды для партии с номером `game_number`.
    pub fn derive(&self, game_number: u64) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"ARCOIRIS_DECK_RNG_V1");

        // Базовый seed
        hasher.update(self.bytes);

        // Номер партии
        hasher.update(game_number.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
