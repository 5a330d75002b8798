use serde::{Deserialize, Serialize};

use crate::domain::card::{CardColor, Suit};
use crate::domain::chips::Chips;
use crate::domain::lanes::SuitMap;
use crate::domain::race::RaceStatus;
use crate::domain::PlayerId;

/// Карта для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    /// "2".."10", "J", "Q", "K", "A".
    pub rank: String,
    pub suit: Suit,
    pub color: CardColor,
    /// Короткий код вида `Ah`.
    pub code: String,
}

// Поля исходящих событий — camelCase, как их ждёт фронт (`remainingCards`, `burnAmount`).

/// `race-started`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceStartedDto {
    pub bets: SuitMap<Chips>,
    pub odds: SuitMap<f64>,
    pub progress: SuitMap<u8>,
    pub remaining_cards: SuitMap<u8>,
    /// Сколько из общей ставки ушло в burn.
    pub burn_amount: Chips,
}

/// `card-drawn`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDrawnDto {
    pub card: CardDto,
    pub progress: SuitMap<u8>,
    pub remaining_cards: SuitMap<u8>,
    pub odds: SuitMap<f64>,
}

/// `race-finished`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceFinishedDto {
    pub winner: Suit,
    pub bet: Chips,
    pub odds: f64,
    pub winnings: Chips,
    pub message: String,
}

/// Одна запись истории гонок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceResultDto {
    pub race_number: u64,
    pub winner: Suit,
    pub bet: Chips,
    pub total_wager: Chips,
    pub odds: f64,
    pub winnings: Chips,
    pub timestamp: u64,
    pub cards_drawn: u32,
}

/// Полное состояние сессии для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionViewDto {
    pub player_id: PlayerId,
    pub status: RaceStatus,
    pub progress: SuitMap<u8>,
    pub remaining_cards: SuitMap<u8>,
    pub bets: SuitMap<Chips>,
    pub odds: SuitMap<f64>,
    pub winner: Option<Suit>,
    pub cards_drawn: u32,
    pub deck_size: usize,
    pub bonus_claimed: bool,
    pub races_played: u64,
}

/// Исходящие события (то, что транспорт шлёт клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum RaceEvent {
    SessionCreated { player_id: PlayerId },
    SessionClosed { player_id: PlayerId },
    RaceStarted(RaceStartedDto),
    CardDrawn(CardDrawnDto),
    RaceFinished(RaceFinishedDto),
    BonusClaimed { amount: Chips },
    #[serde(rename = "error-message")]
    Error { message: String },
}
