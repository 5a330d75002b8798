use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Коэффициент выплаты с фиксированной точкой: хранится в десятых долях.
///
/// `Odds(40)` = 4.0x. Так коэффициент всегда округлён до 1 знака,
/// сравнивается точно и не плывёт между пересчётами.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Odds(pub u32);

impl Odds {
    pub const SCALE: u32 = 10;
    /// Нижняя граница: 1.0x.
    pub const MIN: Odds = Odds(10);
    /// Верхняя граница: 10.0x.
    pub const MAX: Odds = Odds(100);
    /// Честный множитель для 4 равновероятных исходов (полная колода).
    pub const FAIR: Odds = Odds(40);

    pub const fn from_tenths(tenths: u32) -> Self {
        Odds(tenths)
    }

    pub const fn tenths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Выплата по ставке: floor(bet × odds).
    pub fn payout(self, bet: Chips) -> Chips {
        let raw = (bet.0 as u128 * self.0 as u128) / Self::SCALE as u128;
        Chips(u64::try_from(raw).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}x", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
