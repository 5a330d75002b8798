use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{ItemId, PlayerId};

/// Простая генерация ID на основе монотонных счётчиков.
/// Удобно для локальных тестов, dev-CLI и in-memory заглушек.
#[derive(Debug)]
pub struct IdGenerator {
    player_counter: AtomicU64,
    item_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            player_counter: AtomicU64::new(1),
            item_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_item_id(&self) -> ItemId {
        self.item_counter.fetch_add(1, Ordering::Relaxed)
    }
}
