//! Инфраструктурный слой вокруг движка гонки:
//! - генерация ID;
//! - RNG-реализации для движка и доменный seed;
//! - баланс/минт как внешняя способность;
//! - абстракция хранения снапшотов (off-chain / тесты);
//! - маппинги между domain/engine и API.

pub mod ids;
pub mod ledger;
pub mod mapping;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use ledger::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
pub use rng_seed::RngSeed;
