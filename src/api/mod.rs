//! Внешний API движка гонки.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (сессия, ставки, карта, бонус);
//! - запросы (queries.rs) — только чтение;
//! - DTO и исходящие события (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - касса (desk.rs) — порядок вызовов леджера вокруг движка.

pub mod commands;
pub mod desk;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use desk::RaceDesk;
pub use dto::*;
pub use errors::*;
pub use queries::*;
