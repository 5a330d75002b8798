use crate::api::dto::{
    CardDrawnDto, CardDto, RaceFinishedDto, RaceResultDto, RaceStartedDto, SessionViewDto,
};
use crate::domain::card::{Card, Rank};
use crate::domain::chips::Chips;
use crate::domain::lanes::SuitMap;
use crate::domain::odds::Odds;
use crate::domain::race::RaceResult;
use crate::engine::race_loop::{CardDrawn, RaceSession, RaceSettlement, RaceStarted};

/// Подпись ранга для фронта ("10", а не "T").
pub fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

/// Коэффициенты с фиксированной точкой → f64 для провода.
pub fn odds_to_api(odds: &SuitMap<Odds>) -> SuitMap<f64> {
    odds.map(|_, o| o.as_f64())
}

pub fn card_to_dto(card: Card) -> CardDto {
    CardDto {
        rank: rank_label(card.rank).to_string(),
        suit: card.suit,
        color: card.color(),
        code: card.to_string(),
    }
}

pub fn race_started_to_dto(started: &RaceStarted, burn_amount: Chips) -> RaceStartedDto {
    RaceStartedDto {
        bets: started.bets,
        odds: odds_to_api(&started.odds),
        progress: started.progress,
        remaining_cards: started.remaining,
        burn_amount,
    }
}

pub fn card_drawn_to_dto(drawn: &CardDrawn) -> CardDrawnDto {
    CardDrawnDto {
        card: card_to_dto(drawn.card),
        progress: drawn.progress,
        remaining_cards: drawn.remaining,
        odds: odds_to_api(&drawn.odds),
    }
}

pub fn settlement_to_dto(settlement: &RaceSettlement) -> RaceFinishedDto {
    RaceFinishedDto {
        winner: settlement.winner,
        bet: settlement.bet,
        odds: settlement.odds.as_f64(),
        winnings: settlement.winnings,
        message: settlement.message.clone(),
    }
}

pub fn result_to_dto(result: &RaceResult) -> RaceResultDto {
    RaceResultDto {
        race_number: result.race_number,
        winner: result.winner,
        bet: result.bet,
        total_wager: result.total_wager,
        odds: result.odds.as_f64(),
        winnings: result.winnings,
        timestamp: result.timestamp,
        cards_drawn: result.cards_drawn,
    }
}

pub fn session_to_dto(session: &RaceSession) -> SessionViewDto {
    SessionViewDto {
        player_id: session.player_id,
        status: session.status,
        progress: session.progress,
        remaining_cards: session.remaining,
        bets: session.bets,
        odds: odds_to_api(&session.odds),
        winner: session.winner,
        cards_drawn: session.cards_drawn,
        deck_size: session.deck.len(),
        bonus_claimed: session.bonus_claimed,
        races_played: session.races_played,
    }
}
