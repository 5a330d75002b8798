use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::SessionManager;
use crate::infra::mapping::{result_to_dto, session_to_dto};

use super::dto::{RaceResultDto, SessionViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущее состояние сессии игрока.
    GetSession { player_id: PlayerId },

    /// Последние итоги гонок игрока (от старых к новым).
    GetResults { player_id: PlayerId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Session(SessionViewDto),
    Results(Vec<RaceResultDto>),
}

/// Выполнить запрос поверх менеджера сессий.
pub fn run_query(manager: &SessionManager, query: &Query) -> Result<QueryResponse, ApiError> {
    match *query {
        Query::GetSession { player_id } => {
            let session = manager
                .session(player_id)
                .ok_or(ApiError::SessionNotFound(player_id))?;
            Ok(QueryResponse::Session(session_to_dto(session)))
        }
        Query::GetResults { player_id } => {
            let session = manager
                .session(player_id)
                .ok_or(ApiError::SessionNotFound(player_id))?;
            Ok(QueryResponse::Results(
                session.results.iter().map(result_to_dto).collect(),
            ))
        }
    }
}
