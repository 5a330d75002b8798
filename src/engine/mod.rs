//! Движок карточной гонки: ставки, вытягивание карт, коэффициенты, выплаты.
//!
//! Состояние одного игрока: `RaceSession`
//! Основные операции:
//!   - `new_session` – создать сессию со свежей колодой
//!   - `start_race` – принять ставки и запустить гонку
//!   - `draw_card` – вытянуть карту, сдвинуть масть, пересчитать коэффициенты
//!   - `settle_race` – рассчитать выплату и вернуть сессию к ставкам
//!   - `claim_bonus` – разовый бонус за время жизни сессии

pub mod config;
pub mod errors;
pub mod history;
pub mod odds;
pub mod race_loop;
pub mod session_manager;
pub mod validation;

pub use config::RaceConfig;
pub use errors::EngineError;
pub use history::ResultHistory;
pub use odds::calculate_odds;
pub use race_loop::{
    claim_bonus, draw_card, new_session, settle_race, start_race, CardDrawn, RaceSession,
    RaceSettlement, RaceStarted,
};
pub use session_manager::{ManagerError, SessionManager};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртка над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
