use thiserror::Error;

/// Ошибки движка гонки.
///
/// Любая ошибка возвращается ДО мутации сессии: состояние остаётся прежним.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Некорректная ставка: {0}")]
    InvalidBet(String),

    #[error("Гонка не идёт – сначала сделайте ставку")]
    NotRacing,

    #[error("Гонка уже идёт")]
    RaceAlreadyRunning,

    #[error("Гонка ещё не завершена")]
    NotFinished,

    #[error("Гонка завершена, но ещё не рассчитана")]
    AwaitingSettlement,

    #[error("Колода закончилась")]
    DeckExhausted,

    #[error("Бонус уже получен")]
    AlreadyClaimed,

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),
}
