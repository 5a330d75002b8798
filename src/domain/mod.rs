//! Доменная модель карточной гонки: карты, колода, дорожки-масти, коэффициенты, итоги.

pub mod card;
pub mod chips;
pub mod deck;
pub mod lanes;
pub mod odds;
pub mod race;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type ItemId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use lanes::*;
pub use odds::*;
pub use race::*;
