//! Баланс игрока и "блокчейн"-операции как внешняя способность (capability).
//!
//! Движок гонки баланс НЕ хранит. Списание ставки, burn и начисление
//! выигрыша делает вызывающий код (см. `api::desk::RaceDesk`) через этот трейт.
//! В проде за ним стоит реальная интеграция, в тестах — `InMemoryLedger`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::{ItemId, PlayerId};
use crate::infra::ids::IdGenerator;

/// Ошибки внешнего леджера.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Недостаточно средств: нужно {needed:?}, доступно {available:?}")]
    InsufficientFunds { needed: Chips, available: Chips },

    /// Внешний сервис недоступен / отклонил операцию.
    #[error("Леджер недоступен: {0}")]
    Unavailable(String),
}

/// Атрибуты NFT-предмета для минта.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemAttributes {
    pub name: String,
    pub traits: HashMap<String, String>,
}

/// Уже заминченный предмет (для in-memory реализации).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MintedItem {
    pub id: ItemId,
    pub owner: PlayerId,
    pub attributes: ItemAttributes,
}

/// Способность "баланс + минт", которую вызывающий код передаёт явно.
pub trait BalanceLedger {
    fn balance(&self, player_id: PlayerId) -> Chips;

    /// Списать сумму. Ошибка — без изменения баланса.
    fn debit(&mut self, player_id: PlayerId, amount: Chips) -> Result<(), LedgerError>;

    fn credit(&mut self, player_id: PlayerId, amount: Chips);

    /// Вывести сумму из обращения.
    fn burn(&mut self, amount: Chips);

    fn mint_item(
        &mut self,
        owner: PlayerId,
        attributes: ItemAttributes,
    ) -> Result<ItemId, LedgerError>;
}

/// Политика burn: фиксированный процент от общей ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BurnPolicy {
    pub percent: u8,
}

impl Default for BurnPolicy {
    fn default() -> Self {
        Self { percent: 10 }
    }
}

impl BurnPolicy {
    pub fn new(percent: u8) -> Result<Self, LedgerError> {
        if percent > 100 {
            return Err(LedgerError::Unavailable(format!(
                "burn percent должен быть в 0..=100, получено {percent}"
            )));
        }
        Ok(Self { percent })
    }

    pub fn burn_amount(&self, total_wager: Chips) -> Chips {
        total_wager.percent(self.percent)
    }
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<PlayerId, Chips>,
    burned: Chips,
    items: Vec<MintedItem>,
    ids: IdGenerator,
    /// Если задано — mint_item отвечает этой ошибкой.
    mint_failure: Option<String>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, player_id: PlayerId, amount: Chips) -> Self {
        self.balances.insert(player_id, amount);
        self
    }

    pub fn set_balance(&mut self, player_id: PlayerId, amount: Chips) {
        self.balances.insert(player_id, amount);
    }

    pub fn total_burned(&self) -> Chips {
        self.burned
    }

    pub fn items_of(&self, owner: PlayerId) -> impl Iterator<Item = &MintedItem> {
        self.items.iter().filter(move |i| i.owner == owner)
    }

    /// Сымитировать отказ внешнего сервиса при минте.
    pub fn fail_mints_with(&mut self, reason: impl Into<String>) {
        self.mint_failure = Some(reason.into());
    }
}

impl BalanceLedger for InMemoryLedger {
    fn balance(&self, player_id: PlayerId) -> Chips {
        self.balances.get(&player_id).copied().unwrap_or(Chips::ZERO)
    }

    fn debit(&mut self, player_id: PlayerId, amount: Chips) -> Result<(), LedgerError> {
        let available = self.balance(player_id);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        self.balances.insert(player_id, available - amount);
        Ok(())
    }

    fn credit(&mut self, player_id: PlayerId, amount: Chips) {
        *self.balances.entry(player_id).or_insert(Chips::ZERO) += amount;
    }

    fn burn(&mut self, amount: Chips) {
        self.burned += amount;
    }

    fn mint_item(
        &mut self,
        owner: PlayerId,
        attributes: ItemAttributes,
    ) -> Result<ItemId, LedgerError> {
        if let Some(reason) = &self.mint_failure {
            return Err(LedgerError::Unavailable(reason.clone()));
        }
        let id = self.ids.next_item_id();
        self.items.push(MintedItem {
            id,
            owner,
            attributes,
        });
        Ok(id)
    }
}
