// src/engine/session_manager.rs

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::chips::Chips;
use crate::domain::lanes::SuitMap;
use crate::domain::PlayerId;
use crate::engine::config::RaceConfig;
use crate::engine::race_loop::{
    self, CardDrawn, RaceSession, RaceSettlement, RaceStarted,
};
use crate::engine::{EngineError, RandomSource};

/// Ошибки уровня менеджера сессий (над движком одной гонки).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ManagerError {
    /// Сессии для такого игрока нет (не создана или уже закрыта).
    #[error("Сессия игрока {0} не найдена")]
    SessionNotFound(PlayerId),

    /// Проброшенная ошибка из движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Менеджер сессий:
/// - хранит по одной RaceSession на игрока (PlayerId);
/// - даёт start_race/draw_card/settle_race/claim_bonus поверх race_loop.
///
/// Все мутации идут через `&mut self`, поэтому операции над одной
/// сессией сериализуются самим владельцем менеджера.
pub struct SessionManager {
    sessions: HashMap<PlayerId, RaceSession>,
    config: RaceConfig,
}

impl SessionManager {
    /// Менеджер с проверенным конфигом.
    pub fn new(config: RaceConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            sessions: HashMap::new(),
            config,
        })
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Создать сессию для игрока.
    ///
    /// Если сессия уже была — она заменяется целиком (включая флаг бонуса).
    pub fn create_session<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        rng: &mut R,
    ) -> &RaceSession {
        let session = race_loop::new_session(player_id, &self.config, rng);
        if self.sessions.insert(player_id, session).is_some() {
            warn!(player_id, "race session re-initialized, previous state dropped");
        } else {
            info!(player_id, "race session created");
        }
        &self.sessions[&player_id]
    }

    /// Сессия игрока; создаётся лениво, если её ещё нет.
    pub fn get_or_create<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        rng: &mut R,
    ) -> &mut RaceSession {
        let config = &self.config;
        self.sessions.entry(player_id).or_insert_with(|| {
            info!(player_id, "race session created lazily");
            race_loop::new_session(player_id, config, rng)
        })
    }

    /// Закрыть сессию (игрок отключился).
    pub fn destroy_session(&mut self, player_id: PlayerId) -> Option<RaceSession> {
        let removed = self.sessions.remove(&player_id);
        if removed.is_some() {
            info!(player_id, "race session destroyed");
        }
        removed
    }

    pub fn has_session(&self, player_id: PlayerId) -> bool {
        self.sessions.contains_key(&player_id)
    }

    pub fn session(&self, player_id: PlayerId) -> Option<&RaceSession> {
        self.sessions.get(&player_id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Вставить сессию как есть (например, восстановленную из снапшота).
    pub fn restore_session(&mut self, session: RaceSession) {
        self.sessions.insert(session.player_id, session);
    }

    fn session_mut(&mut self, player_id: PlayerId) -> Result<&mut RaceSession, ManagerError> {
        self.sessions
            .get_mut(&player_id)
            .ok_or(ManagerError::SessionNotFound(player_id))
    }

    pub fn start_race<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        bets: SuitMap<Chips>,
        rng: &mut R,
    ) -> Result<RaceStarted, ManagerError> {
        let session = self.session_mut(player_id)?;
        let started = race_loop::start_race(session, bets, rng)?;
        info!(
            player_id,
            total_wager = started.total_wager.0,
            "race started"
        );
        Ok(started)
    }

    pub fn draw_card(&mut self, player_id: PlayerId, now_ts: u64) -> Result<CardDrawn, ManagerError> {
        let session = self
            .sessions
            .get_mut(&player_id)
            .ok_or(ManagerError::SessionNotFound(player_id))?;
        let drawn = race_loop::draw_card(session, &self.config, now_ts)?;
        debug!(
            player_id,
            card = %drawn.card,
            cards_drawn = session.cards_drawn,
            "card drawn"
        );
        if let Some(winner) = drawn.winner {
            info!(player_id, winner = winner.lane_name(), "race finished");
        }
        Ok(drawn)
    }

    pub fn settle_race<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        rng: &mut R,
    ) -> Result<RaceSettlement, ManagerError> {
        let session = self.session_mut(player_id)?;
        let settlement = race_loop::settle_race(session, rng)?;
        info!(
            player_id,
            winner = settlement.winner.lane_name(),
            winnings = settlement.winnings.0,
            "race settled"
        );
        Ok(settlement)
    }

    pub fn claim_bonus(&mut self, player_id: PlayerId) -> Result<Chips, ManagerError> {
        let session = self
            .sessions
            .get_mut(&player_id)
            .ok_or(ManagerError::SessionNotFound(player_id))?;
        let amount = race_loop::claim_bonus(session, &self.config)?;
        info!(player_id, amount = amount.0, "bonus claimed");
        Ok(amount)
    }
}
