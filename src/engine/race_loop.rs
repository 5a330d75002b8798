use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::lanes::SuitMap;
use crate::domain::odds::Odds;
use crate::domain::race::{RaceResult, RaceStatus};
use crate::domain::PlayerId;
use crate::engine::config::RaceConfig;
use crate::engine::errors::EngineError;
use crate::engine::history::ResultHistory;
use crate::engine::odds::calculate_odds;
use crate::engine::validation::validate_bets;
use crate::engine::RandomSource;

/// Карт одной масти в полной колоде.
pub const CARDS_PER_SUIT: u8 = 13;

/// Полное состояние гонки одного игрока.
///
/// Живёт от подключения до отключения игрока. Между гонками сбрасывается
/// всё, кроме `results`, `bonus_claimed` и `races_played`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceSession {
    pub player_id: PlayerId,
    /// Оставшиеся карты (тянем с хвоста).
    pub deck: Deck,
    /// Прогресс каждой масти, 0..=100.
    pub progress: SuitMap<u8>,
    /// Сколько карт каждой масти ещё в колоде, 0..=13.
    pub remaining: SuitMap<u8>,
    pub bets: SuitMap<Chips>,
    /// Коэффициенты после последнего пересчёта.
    pub odds: SuitMap<Odds>,
    pub status: RaceStatus,
    /// Заполняется только при переходе в `Finished`.
    pub winner: Option<Suit>,
    pub results: ResultHistory,
    /// Разовый бонус за всё время жизни сессии (не сбрасывается между гонками).
    pub bonus_claimed: bool,
    /// Карт вытянуто с начала текущей гонки.
    pub cards_drawn: u32,
    pub races_played: u64,
}

impl RaceSession {
    fn new(player_id: PlayerId, deck: Deck, history_limit: usize) -> Self {
        let remaining = remaining_in(&deck);
        Self {
            player_id,
            deck,
            progress: SuitMap::splat(0),
            remaining,
            bets: SuitMap::splat(Chips::ZERO),
            odds: calculate_odds(&remaining),
            status: RaceStatus::Betting,
            winner: None,
            results: ResultHistory::new(history_limit),
            bonus_claimed: false,
            cards_drawn: 0,
            races_played: 0,
        }
    }

    /// Сумма ставок текущей гонки.
    pub fn total_wager(&self) -> Chips {
        self.bets.values().sum()
    }

    /// Коэффициенты по текущим оставшимся картам (без мутации).
    pub fn calculate_odds(&self) -> SuitMap<Odds> {
        calculate_odds(&self.remaining)
    }

    /// Свежая перемешанная колода, обнулённые прогресс/ставки.
    fn reset_for_next_race<R: RandomSource>(&mut self, rng: &mut R) {
        self.deck = shuffled_deck(rng);
        self.progress = SuitMap::splat(0);
        self.remaining = remaining_in(&self.deck);
        self.bets = SuitMap::splat(Chips::ZERO);
        self.odds = calculate_odds(&self.remaining);
        self.status = RaceStatus::Betting;
        self.winner = None;
        self.cards_drawn = 0;
    }
}

/// Сколько карт каждой масти лежит в колоде.
fn remaining_in(deck: &Deck) -> SuitMap<u8> {
    SuitMap::from_fn(|suit| u8::try_from(deck.count_suit(suit)).unwrap_or(CARDS_PER_SUIT))
}

/// Ответ на старт гонки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceStarted {
    pub bets: SuitMap<Chips>,
    pub total_wager: Chips,
    pub odds: SuitMap<Odds>,
    pub progress: SuitMap<u8>,
    pub remaining: SuitMap<u8>,
}

/// Снэпшот после вытянутой карты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDrawn {
    pub card: Card,
    pub progress: SuitMap<u8>,
    pub remaining: SuitMap<u8>,
    pub odds: SuitMap<Odds>,
    /// `Some` только если именно эта карта завершила гонку.
    pub winner: Option<Suit>,
}

/// Расчёт завершённой гонки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceSettlement {
    pub winner: Suit,
    /// Ставка на победителя.
    pub bet: Chips,
    pub odds: Odds,
    pub winnings: Chips,
    pub message: String,
}

fn shuffled_deck<R: RandomSource>(rng: &mut R) -> Deck {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    deck
}

/// Новая сессия: статус betting, свежая колода, нулевой прогресс, 13 карт на масть.
pub fn new_session<R: RandomSource>(
    player_id: PlayerId,
    config: &RaceConfig,
    rng: &mut R,
) -> RaceSession {
    RaceSession::new(player_id, shuffled_deck(rng), config.history_limit)
}

/// Старт гонки:
/// - проверяет ставки (сумма > 0);
/// - перемешивает новую колоду, обнуляет прогресс;
/// - запоминает ставки и переводит сессию в racing.
pub fn start_race<R: RandomSource>(
    session: &mut RaceSession,
    bets: SuitMap<Chips>,
    rng: &mut R,
) -> Result<RaceStarted, EngineError> {
    match session.status {
        RaceStatus::Betting => {}
        RaceStatus::Racing => return Err(EngineError::RaceAlreadyRunning),
        RaceStatus::Finished => return Err(EngineError::AwaitingSettlement),
    }
    let total_wager = validate_bets(&bets)?;

    session.reset_for_next_race(rng);
    session.bets = bets;
    session.status = RaceStatus::Racing;

    Ok(RaceStarted {
        bets,
        total_wager,
        odds: session.odds,
        progress: session.progress,
        remaining: session.remaining,
    })
}

/// Вытянуть одну карту:
/// - масть карты двигается на `progress_increment` (не больше 100);
/// - коэффициенты пересчитываются всегда;
/// - при достижении 100 гонка завершается, итог пишется в историю.
pub fn draw_card(
    session: &mut RaceSession,
    config: &RaceConfig,
    now_ts: u64,
) -> Result<CardDrawn, EngineError> {
    if session.status != RaceStatus::Racing {
        return Err(EngineError::NotRacing);
    }
    let card = session.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
    let lane = card.suit;

    session.cards_drawn += 1;
    session.remaining[lane] = session.remaining[lane].saturating_sub(1);
    session.progress[lane] = session.progress[lane]
        .saturating_add(config.progress_increment)
        .min(100);

    session.odds = calculate_odds(&session.remaining);

    // Сканируем в фиксированном порядке: при одновременном финише выигрывает
    // первая масть из Suit::ALL.
    let winner = Suit::ALL
        .into_iter()
        .find(|s| session.progress[*s] >= 100);

    if let Some(winner) = winner {
        session.status = RaceStatus::Finished;
        session.winner = Some(winner);
        session.races_played += 1;

        let bet = session.bets[winner];
        let odds = session.odds[winner];
        session.results.push(RaceResult {
            race_number: session.races_played,
            winner,
            bet,
            total_wager: session.total_wager(),
            odds,
            winnings: odds.payout(bet),
            timestamp: now_ts,
            cards_drawn: session.cards_drawn,
        });
    }

    Ok(CardDrawn {
        card,
        progress: session.progress,
        remaining: session.remaining,
        odds: session.odds,
        winner,
    })
}

/// Расчёт завершённой гонки и возврат сессии в betting.
///
/// Выплата = ставка на победителя × коэффициент победителя на момент финиша.
/// История и флаг бонуса сохраняются.
pub fn settle_race<R: RandomSource>(
    session: &mut RaceSession,
    rng: &mut R,
) -> Result<RaceSettlement, EngineError> {
    let winner = match (session.status, session.winner) {
        (RaceStatus::Finished, Some(w)) => w,
        _ => return Err(EngineError::NotFinished),
    };

    let bet = session.bets[winner];
    let odds = session.odds[winner];
    let winnings = odds.payout(bet);

    let message = if winnings.is_zero() {
        format!(
            "Победила масть {}. Ставки на неё не было — выигрыша нет.",
            winner.lane_name()
        )
    } else {
        format!(
            "Победила масть {}! Ставка {} × {} = выигрыш {}.",
            winner.lane_name(),
            bet.0,
            odds,
            winnings.0
        )
    };

    session.reset_for_next_race(rng);

    Ok(RaceSettlement {
        winner,
        bet,
        odds,
        winnings,
        message,
    })
}

/// Разовый бонус за время жизни сессии.
pub fn claim_bonus(session: &mut RaceSession, config: &RaceConfig) -> Result<Chips, EngineError> {
    if session.bonus_claimed {
        return Err(EngineError::AlreadyClaimed);
    }
    session.bonus_claimed = true;
    Ok(config.bonus_amount)
}
