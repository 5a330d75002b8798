// src/api/desk.rs

use tracing::{info, warn};

use crate::domain::PlayerId;
use crate::engine::validation::{bets_from_signed, validate_bets};
use crate::engine::{RandomSource, SessionManager};
use crate::infra::ledger::{BalanceLedger, BurnPolicy};
use crate::infra::mapping::{card_drawn_to_dto, race_started_to_dto, settlement_to_dto};

use super::commands::{Command, DrawCardCommand, StartRaceCommand};
use super::dto::RaceEvent;
use super::errors::ApiError;
use super::queries::{run_query, Query, QueryResponse};

/// "Касса" гонки: склеивает движок с внешним леджером.
///
/// Порядок вызовов:
/// - `start-race`: проверка ставок → debit всей суммы → start_race → burn;
/// - `draw-card`: draw_card → при финише settle_race → credit выигрыша;
/// - `claim-bonus`: claim_bonus → credit.
///
/// Движок баланс не видит; леджер передаётся сюда явно.
pub struct RaceDesk<L: BalanceLedger> {
    manager: SessionManager,
    ledger: L,
    burn: BurnPolicy,
}

impl<L: BalanceLedger> RaceDesk<L> {
    pub fn new(manager: SessionManager, ledger: L, burn: BurnPolicy) -> Self {
        Self {
            manager,
            ledger,
            burn,
        }
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    /// Для восстановления сессий из снапшотов.
    pub fn manager_mut(&mut self) -> &mut SessionManager {
        &mut self.manager
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn query(&self, query: &Query) -> Result<QueryResponse, ApiError> {
        run_query(&self.manager, query)
    }

    /// Обработать команду; ошибка превращается в событие `error-message`.
    pub fn handle_or_report<R: RandomSource>(
        &mut self,
        command: Command,
        rng: &mut R,
    ) -> Vec<RaceEvent> {
        let player_id = command.player_id();
        match self.handle(command, rng) {
            Ok(events) => events,
            Err(err) => {
                warn!(player_id, error = %err, "command rejected");
                vec![RaceEvent::Error {
                    message: err.to_string(),
                }]
            }
        }
    }

    /// Обработать команду. При ошибке ни сессия, ни баланс не меняются.
    pub fn handle<R: RandomSource>(
        &mut self,
        command: Command,
        rng: &mut R,
    ) -> Result<Vec<RaceEvent>, ApiError> {
        match command {
            Command::CreateSession(cmd) => {
                self.manager.create_session(cmd.player_id, rng);
                Ok(vec![RaceEvent::SessionCreated {
                    player_id: cmd.player_id,
                }])
            }
            Command::DestroySession(cmd) => {
                self.manager
                    .destroy_session(cmd.player_id)
                    .ok_or(ApiError::SessionNotFound(cmd.player_id))?;
                Ok(vec![RaceEvent::SessionClosed {
                    player_id: cmd.player_id,
                }])
            }
            Command::StartRace(cmd) => self.start_race(cmd, rng),
            Command::DrawCard(cmd) => self.draw_card(cmd, rng),
            Command::ClaimBonus(cmd) => self.claim_bonus(cmd.player_id, rng),
        }
    }

    fn start_race<R: RandomSource>(
        &mut self,
        cmd: StartRaceCommand,
        rng: &mut R,
    ) -> Result<Vec<RaceEvent>, ApiError> {
        let player_id = cmd.player_id;
        let bets = bets_from_signed(&cmd.bets)?;
        let total = validate_bets(&bets)?;

        self.ledger.debit(player_id, total)?;
        self.manager.get_or_create(player_id, rng);

        let started = match self.manager.start_race(player_id, bets, rng) {
            Ok(started) => started,
            Err(err) => {
                // Возвращаем списанное: гонка не стартовала.
                self.ledger.credit(player_id, total);
                return Err(err.into());
            }
        };

        let burn_amount = self.burn.burn_amount(total);
        self.ledger.burn(burn_amount);

        Ok(vec![RaceEvent::RaceStarted(race_started_to_dto(
            &started,
            burn_amount,
        ))])
    }

    fn draw_card<R: RandomSource>(
        &mut self,
        cmd: DrawCardCommand,
        rng: &mut R,
    ) -> Result<Vec<RaceEvent>, ApiError> {
        let player_id = cmd.player_id;
        let drawn = self.manager.draw_card(player_id, cmd.timestamp)?;

        let mut events = vec![RaceEvent::CardDrawn(card_drawn_to_dto(&drawn))];

        if drawn.winner.is_some() {
            let settlement = self.manager.settle_race(player_id, rng)?;
            if !settlement.winnings.is_zero() {
                self.ledger.credit(player_id, settlement.winnings);
            }
            events.push(RaceEvent::RaceFinished(settlement_to_dto(&settlement)));
        }

        Ok(events)
    }

    fn claim_bonus<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        rng: &mut R,
    ) -> Result<Vec<RaceEvent>, ApiError> {
        self.manager.get_or_create(player_id, rng);
        let amount = self.manager.claim_bonus(player_id)?;
        self.ledger.credit(player_id, amount);
        info!(
            player_id,
            balance = self.ledger.balance(player_id).0,
            "bonus credited"
        );
        Ok(vec![RaceEvent::BonusClaimed { amount }])
    }
}
