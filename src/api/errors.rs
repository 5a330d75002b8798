use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlayerId;
use crate::engine::{EngineError, ManagerError};
use crate::infra::ledger::LedgerError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Ставки пустые, отрицательные или больше баланса.
    #[error("Некорректная ставка: {0}")]
    InvalidBet(String),

    /// Карту тянут, когда гонка не идёт.
    #[error("Гонка не идёт – сначала сделайте ставку")]
    NotRacing,

    #[error("Колода закончилась")]
    DeckExhausted,

    #[error("Бонус уже получен")]
    AlreadyClaimed,

    /// Сессия не найдена — клиенту надо создать новую.
    #[error("Сессия игрока {0} не найдена")]
    SessionNotFound(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    #[error("Команда недоступна: {0}")]
    InvalidCommand(String),

    /// Внешний леджер отказал.
    #[error("Ошибка леджера: {0}")]
    Ledger(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidBet(reason) => ApiError::InvalidBet(reason),
            EngineError::NotRacing => ApiError::NotRacing,
            EngineError::DeckExhausted => ApiError::DeckExhausted,
            EngineError::AlreadyClaimed => ApiError::AlreadyClaimed,
            other => ApiError::InvalidCommand(other.to_string()),
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::SessionNotFound(player_id) => ApiError::SessionNotFound(player_id),
            ManagerError::Engine(e) => e.into(),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds { needed, available } => ApiError::InvalidBet(format!(
                "недостаточно средств: ставка {}, баланс {}",
                needed.0, available.0
            )),
            LedgerError::Unavailable(reason) => ApiError::Ledger(reason),
        }
    }
}
