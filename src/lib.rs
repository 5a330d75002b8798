//! Главный модуль приложения Card Race на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response).
//! Состояние сессий живёт в `engine::SessionManager`, снапшоты сессий
//! сохраняются через `infra::persistence::RaceStorage`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RaceOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera. Пока не нужны.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RaceMessage {}

/// Запросы к сервису (read-only).
pub type RaceQuery = Query;

/// Ответы на запросы.
pub type RaceResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct RaceAbi;

impl ContractAbi for RaceAbi {
    type Operation = RaceOperation;
    type Response = ();
}

impl ServiceAbi for RaceAbi {
    type Query = RaceQuery;
    type QueryResponse = RaceResponse;
}
