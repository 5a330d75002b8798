// tests/engine_core_test.rs
//
// Жизненный цикл гонки: создание сессии, старт, вытягивание карт, финиш, расчёт.

use card_race_engine::domain::{
    card::{Card, Rank, Suit},
    chips::Chips,
    lanes::SuitMap,
    odds::Odds,
    race::RaceStatus,
};
use card_race_engine::engine::{
    claim_bonus, draw_card, new_session, settle_race, start_race, RaceConfig, RaceSession,
    RandomSource,
};
use card_race_engine::infra::rng::DeterministicRng;

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => колода остаётся в стандартном порядке,
/// и первыми (с хвоста) выходят 13 пик.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn bets_on(suit: Suit, amount: u64) -> SuitMap<Chips> {
    let mut bets = SuitMap::splat(Chips::ZERO);
    bets[suit] = Chips(amount);
    bets
}

fn remaining_total(session: &RaceSession) -> u32 {
    session.remaining.values().map(u32::from).sum()
}

fn started_session(suit: Suit, amount: u64) -> (RaceSession, RaceConfig) {
    let config = RaceConfig::default();
    let mut rng = DummyRng;
    let mut session = new_session(1, &config, &mut rng);
    start_race(&mut session, bets_on(suit, amount), &mut rng).unwrap();
    (session, config)
}

#[test]
fn fresh_session_is_clean() {
    let config = RaceConfig::default();
    let session = new_session(7, &config, &mut DummyRng);

    assert_eq!(session.player_id, 7);
    assert_eq!(session.status, RaceStatus::Betting);
    assert_eq!(session.progress, SuitMap::splat(0));
    assert_eq!(session.remaining, SuitMap::splat(13));
    assert_eq!(session.bets, SuitMap::splat(Chips::ZERO));
    assert_eq!(session.deck.len(), 52);
    assert_eq!(session.winner, None);
    assert!(!session.bonus_claimed);
    assert!(session.results.is_empty());
    assert_eq!(session.cards_drawn, 0);
}

#[test]
fn scenario_a_fresh_race_has_fair_odds() {
    let config = RaceConfig::default();
    let mut rng = DummyRng;
    let mut session = new_session(1, &config, &mut rng);

    let started = start_race(&mut session, bets_on(Suit::Hearts, 10), &mut rng).unwrap();

    assert_eq!(started.odds, SuitMap::splat(Odds::FAIR));
    assert!((started.odds.hearts.as_f64() - 4.0).abs() < 1e-9);
    assert_eq!(started.progress, SuitMap::splat(0));
    assert_eq!(started.remaining, SuitMap::splat(13));
    assert_eq!(started.total_wager, Chips(10));
    assert_eq!(session.status, RaceStatus::Racing);
    assert_eq!(session.bets.hearts, Chips(10));
}

#[test]
fn scenario_b_spades_finish_after_seven_draws() {
    let (mut session, config) = started_session(Suit::Spades, 10);

    for expected in [15u8, 30, 45, 60, 75] {
        let drawn = draw_card(&mut session, &config, 0).unwrap();
        assert_eq!(drawn.card.suit, Suit::Spades);
        assert_eq!(drawn.progress.spades, expected);
        assert_eq!(drawn.winner, None);
    }

    let sixth = draw_card(&mut session, &config, 0).unwrap();
    assert_eq!(sixth.progress.spades, 90);
    assert_eq!(sixth.winner, None);
    assert_eq!(session.status, RaceStatus::Racing);

    let seventh = draw_card(&mut session, &config, 1_700_000_000).unwrap();
    assert_eq!(seventh.progress.spades, 100);
    assert_eq!(seventh.winner, Some(Suit::Spades));
    assert_eq!(session.status, RaceStatus::Finished);
    assert_eq!(session.winner, Some(Suit::Spades));
}

#[test]
fn first_draw_is_ace_of_spades_without_shuffle() {
    let (mut session, config) = started_session(Suit::Spades, 10);
    let drawn = draw_card(&mut session, &config, 0).unwrap();
    assert_eq!(drawn.card, Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(drawn.remaining.spades, 12);
    assert_eq!(session.cards_drawn, 1);
}

#[test]
fn odds_move_after_each_draw() {
    let (mut session, config) = started_session(Suit::Spades, 10);
    let drawn = draw_card(&mut session, &config, 0).unwrap();

    // 51 / 12 = 4.25 -> 4.3 ; 51 / 13 = 3.92 -> 3.9
    assert_eq!(drawn.odds.spades, Odds(43));
    assert_eq!(drawn.odds.hearts, Odds(39));
    assert_eq!(drawn.odds, session.odds);
}

#[test]
fn remaining_plus_drawn_is_always_52() {
    let config = RaceConfig::default();
    for seed in 0..50u64 {
        let mut rng = DeterministicRng::from_u64(seed);
        let mut session = new_session(seed, &config, &mut rng);
        start_race(&mut session, bets_on(Suit::Clubs, 5), &mut rng).unwrap();

        while session.status == RaceStatus::Racing {
            let drawn = draw_card(&mut session, &config, 0).unwrap();
            assert_eq!(remaining_total(&session) + session.cards_drawn, 52);
            assert_eq!(session.deck.len() as u32, 52 - session.cards_drawn);
            for suit in Suit::ALL {
                assert_eq!(session.deck.count_suit(suit), session.remaining[suit] as usize);
                assert!(session.progress[suit] <= 100);
            }
            assert!(drawn.odds.values().all(|o| o >= Odds::MIN && o <= Odds::MAX));
        }

        // С шагом 15 масть финиширует максимум за 7 своих карт:
        // до исчерпания колоды дойти нельзя.
        assert_eq!(session.status, RaceStatus::Finished);
        assert!(session.cards_drawn <= 4 * 6 + 1);
    }
}

#[test]
fn winner_lane_is_the_one_that_reached_100() {
    let config = RaceConfig::default();
    for seed in 100..130u64 {
        let mut rng = DeterministicRng::from_u64(seed);
        let mut session = new_session(1, &config, &mut rng);
        start_race(&mut session, bets_on(Suit::Hearts, 1), &mut rng).unwrap();

        let mut last = None;
        while session.status == RaceStatus::Racing {
            last = Some(draw_card(&mut session, &config, 0).unwrap());
        }
        let last = last.unwrap();
        let winner = last.winner.unwrap();
        assert_eq!(last.card.suit, winner);
        assert_eq!(last.progress[winner], 100);
        let others_done = Suit::ALL
            .into_iter()
            .filter(|s| *s != winner)
            .any(|s| last.progress[s] >= 100);
        assert!(!others_done);
    }
}

#[test]
fn settle_pays_bet_times_finishing_odds_and_resets() {
    let (mut session, config) = started_session(Suit::Spades, 10);
    let mut last = None;
    for _ in 0..7 {
        last = Some(draw_card(&mut session, &config, 42).unwrap());
    }
    let finishing_odds = last.unwrap().odds.spades;
    // 45 / 6 = 7.5
    assert_eq!(finishing_odds, Odds(75));

    let settlement = settle_race(&mut session, &mut DummyRng).unwrap();
    assert_eq!(settlement.winner, Suit::Spades);
    assert_eq!(settlement.bet, Chips(10));
    assert_eq!(settlement.odds, finishing_odds);
    assert_eq!(settlement.winnings, Chips(75));
    assert!(settlement.message.contains("spades"));

    // Назад в betting со свежей колодой.
    assert_eq!(session.status, RaceStatus::Betting);
    assert_eq!(session.bets, SuitMap::splat(Chips::ZERO));
    assert_eq!(session.deck.len(), 52);
    assert_eq!(session.progress, SuitMap::splat(0));
    assert_eq!(session.remaining, SuitMap::splat(13));
    assert_eq!(session.winner, None);
    assert_eq!(session.cards_drawn, 0);
}

#[test]
fn settle_without_bet_on_winner_pays_nothing() {
    let (mut session, config) = started_session(Suit::Hearts, 10);
    for _ in 0..7 {
        draw_card(&mut session, &config, 0).unwrap();
    }
    let settlement = settle_race(&mut session, &mut DummyRng).unwrap();
    assert_eq!(settlement.winner, Suit::Spades);
    assert_eq!(settlement.bet, Chips::ZERO);
    assert_eq!(settlement.winnings, Chips::ZERO);
    assert!(settlement.message.contains("выигрыша нет"));
}

#[test]
fn finishing_draw_records_result_once() {
    let (mut session, config) = started_session(Suit::Spades, 10);
    for _ in 0..7 {
        draw_card(&mut session, &config, 1234).unwrap();
    }
    assert_eq!(session.results.len(), 1);
    let result = session.results.last().unwrap().clone();
    assert_eq!(result.race_number, 1);
    assert_eq!(result.winner, Suit::Spades);
    assert_eq!(result.bet, Chips(10));
    assert_eq!(result.total_wager, Chips(10));
    assert_eq!(result.winnings, Chips(75));
    assert_eq!(result.timestamp, 1234);
    assert_eq!(result.cards_drawn, 7);

    settle_race(&mut session, &mut DummyRng).unwrap();
    assert_eq!(session.results.len(), 1);
}

#[test]
fn results_history_keeps_last_ten_races() {
    let config = RaceConfig::default();
    let mut rng = DummyRng;
    let mut session = new_session(1, &config, &mut rng);

    for _ in 0..12 {
        start_race(&mut session, bets_on(Suit::Spades, 1), &mut rng).unwrap();
        while session.status == RaceStatus::Racing {
            draw_card(&mut session, &config, 0).unwrap();
        }
        settle_race(&mut session, &mut rng).unwrap();
    }

    assert_eq!(session.races_played, 12);
    assert_eq!(session.results.len(), 10);
    let numbers: Vec<u64> = session.results.iter().map(|r| r.race_number).collect();
    assert_eq!(numbers, (3..=12).collect::<Vec<_>>());
}

#[test]
fn bonus_flag_survives_race_resets() {
    let config = RaceConfig::default();
    let mut rng = DummyRng;
    let mut session = new_session(1, &config, &mut rng);

    assert_eq!(claim_bonus(&mut session, &config).unwrap(), Chips(50));

    start_race(&mut session, bets_on(Suit::Spades, 1), &mut rng).unwrap();
    while session.status == RaceStatus::Racing {
        draw_card(&mut session, &config, 0).unwrap();
    }
    settle_race(&mut session, &mut rng).unwrap();

    assert!(session.bonus_claimed);
    assert_eq!(session.results.len(), 1);
}

#[test]
fn calculate_odds_is_idempotent_without_draws() {
    let (mut session, config) = started_session(Suit::Diamonds, 3);
    draw_card(&mut session, &config, 0).unwrap();
    draw_card(&mut session, &config, 0).unwrap();

    let a = session.calculate_odds();
    let b = session.calculate_odds();
    assert_eq!(a, b);
    assert_eq!(a, session.odds);
}

#[test]
fn custom_increment_changes_draws_to_finish() {
    let config = RaceConfig {
        progress_increment: 12,
        ..RaceConfig::default()
    };
    assert_eq!(config.draws_to_finish(), 9);

    let mut rng = DummyRng;
    let mut session = new_session(1, &config, &mut rng);
    start_race(&mut session, bets_on(Suit::Spades, 1), &mut rng).unwrap();
    for _ in 0..8 {
        let drawn = draw_card(&mut session, &config, 0).unwrap();
        assert_eq!(drawn.winner, None);
    }
    assert_eq!(session.progress.spades, 96);
    let ninth = draw_card(&mut session, &config, 0).unwrap();
    assert_eq!(ninth.winner, Some(Suit::Spades));
    assert_eq!(ninth.progress.spades, 100);
}
