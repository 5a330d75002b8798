//! RngSeed — доменно-разделённый seed для RNG гонок.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || player_id || race_number)
//!   - создавать DeterministicRng из seed
//!
//! Нужен для воспроизводимых гонок (реплей, тесты, dev-CLI).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::PlayerId;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed для конкретного игрока и номера гонки.
    pub fn derive(&self, player_id: PlayerId, race_number: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"CARD_RACE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(player_id.to_le_bytes());
        hasher.update(race_number.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> crate::infra::rng::DeterministicRng {
        crate::infra::rng::DeterministicRng::from_seed(self.bytes)
    }
}
