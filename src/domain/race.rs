use serde::{Deserialize, Serialize};

use crate::domain::card::Suit;
use crate::domain::chips::Chips;
use crate::domain::odds::Odds;

/// Фаза гонки внутри сессии.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    /// Принимаем ставки.
    #[default]
    Betting,
    /// Гонка идёт, можно тянуть карты.
    Racing,
    /// Какая-то масть дошла до 100%, ждём расчёта.
    Finished,
}

/// Итог одной гонки. Хранится в ограниченной истории сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceResult {
    /// Порядковый номер гонки в рамках сессии (с 1).
    pub race_number: u64,
    pub winner: Suit,
    /// Ставка на победившую масть.
    pub bet: Chips,
    /// Сумма ставок по всем мастям.
    pub total_wager: Chips,
    /// Коэффициент победителя на момент финиша.
    pub odds: Odds,
    pub winnings: Chips,
    /// Время финиша (секунды, передаёт вызывающий код).
    pub timestamp: u64,
    pub cards_drawn: u32,
}
