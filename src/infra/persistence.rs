use std::collections::HashMap;

use thiserror::Error;

use crate::domain::PlayerId;
use crate::engine::race_loop::RaceSession;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Снапшот сессии повреждён: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Абстракция хранилища снапшотов сессий.
///
/// Нужна оффчейн-сервисам, которые хотят пережить рестарт:
/// dev CLI сохраняет сессии между запусками через неё.
pub trait RaceStorage {
    fn load_session(&self, player_id: PlayerId) -> Result<Option<RaceSession>, StorageError>;

    fn save_session(&mut self, session: &RaceSession) -> Result<(), StorageError>;

    fn remove_session(&mut self, player_id: PlayerId);
}

/// In-memory реализация: хранит JSON-снапшоты, как их отдал бы внешний сервис.
#[derive(Debug, Default)]
pub struct InMemoryRaceStorage {
    snapshots: HashMap<PlayerId, String>,
}

impl InMemoryRaceStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Сырой снапшот (для отладки / экспорта).
    pub fn raw_snapshot(&self, player_id: PlayerId) -> Option<&str> {
        self.snapshots.get(&player_id).map(String::as_str)
    }

    /// Подложить сырой снапшот (например, пришедший извне).
    pub fn put_raw_snapshot(&mut self, player_id: PlayerId, json: impl Into<String>) {
        self.snapshots.insert(player_id, json.into());
    }
}

impl RaceStorage for InMemoryRaceStorage {
    fn load_session(&self, player_id: PlayerId) -> Result<Option<RaceSession>, StorageError> {
        self.snapshots
            .get(&player_id)
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(StorageError::from)
    }

    fn save_session(&mut self, session: &RaceSession) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)?;
        self.snapshots.insert(session.player_id, json);
        Ok(())
    }

    fn remove_session(&mut self, player_id: PlayerId) {
        self.snapshots.remove(&player_id);
    }
}
