use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;

/// Прирост прогресса масти за одну вытянутую карту (в процентах).
///
/// В прототипах встречались 12 и 15; берём 15.
pub const DEFAULT_PROGRESS_INCREMENT: u8 = 15;

/// Разовый стартовый бонус.
pub const DEFAULT_BONUS_AMOUNT: Chips = Chips(50);

/// Сколько последних итогов гонок хранить в сессии.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Верхняя граница глубины истории.
pub const MAX_HISTORY_LIMIT: usize = 1000;

/// Конфиг движка гонки. Общий для всех сессий одного менеджера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RaceConfig {
    /// Шаг прогресса (1..=100).
    pub progress_increment: u8,
    /// Размер разового бонуса.
    pub bonus_amount: Chips,
    /// Глубина истории итогов (1..=MAX_HISTORY_LIMIT).
    pub history_limit: usize,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            progress_increment: DEFAULT_PROGRESS_INCREMENT,
            bonus_amount: DEFAULT_BONUS_AMOUNT,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl RaceConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.progress_increment == 0 || self.progress_increment > 100 {
            return Err(EngineError::InvalidConfig(format!(
                "progress_increment должен быть в 1..=100, получено {}",
                self.progress_increment
            )));
        }
        if self.history_limit == 0 || self.history_limit > MAX_HISTORY_LIMIT {
            return Err(EngineError::InvalidConfig(format!(
                "history_limit должен быть в 1..={MAX_HISTORY_LIMIT}, получено {}",
                self.history_limit
            )));
        }
        Ok(())
    }

    /// Сколько карт одной масти нужно, чтобы она финишировала.
    pub fn draws_to_finish(&self) -> u32 {
        let step = self.progress_increment.max(1) as u32;
        100u32.div_ceil(step)
    }
}
