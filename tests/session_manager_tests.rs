// tests/session_manager_tests.rs
//
// SessionManager: хранение сессий по игроку, ленивое создание, закрытие, проброс ошибок.

use card_race_engine::domain::{card::Suit, chips::Chips, lanes::SuitMap, race::RaceStatus};
use card_race_engine::engine::{
    EngineError, ManagerError, RaceConfig, RandomSource, SessionManager,
};
use card_race_engine::infra::persistence::{InMemoryRaceStorage, RaceStorage};
use card_race_engine::infra::rng::DeterministicRng;

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn manager() -> SessionManager {
    SessionManager::new(RaceConfig::default()).unwrap()
}

fn bets_on(suit: Suit, amount: u64) -> SuitMap<Chips> {
    let mut bets = SuitMap::splat(Chips::ZERO);
    bets[suit] = Chips(amount);
    bets
}

#[test]
fn new_manager_rejects_bad_config() {
    let bad = RaceConfig {
        progress_increment: 0,
        ..RaceConfig::default()
    };
    assert!(matches!(
        SessionManager::new(bad),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn operations_on_unknown_player_fail_session_not_found() {
    let mut m = manager();
    let mut rng = DummyRng;

    assert_eq!(
        m.draw_card(9, 0).unwrap_err(),
        ManagerError::SessionNotFound(9)
    );
    assert_eq!(
        m.start_race(9, bets_on(Suit::Hearts, 1), &mut rng).unwrap_err(),
        ManagerError::SessionNotFound(9)
    );
    assert_eq!(
        m.settle_race(9, &mut rng).unwrap_err(),
        ManagerError::SessionNotFound(9)
    );
    assert_eq!(m.claim_bonus(9).unwrap_err(), ManagerError::SessionNotFound(9));
    assert_eq!(m.session_count(), 0);
}

#[test]
fn sessions_are_independent() {
    let mut m = manager();
    let mut rng = DummyRng;
    m.create_session(1, &mut rng);
    m.create_session(2, &mut rng);

    m.start_race(1, bets_on(Suit::Spades, 10), &mut rng).unwrap();
    m.draw_card(1, 0).unwrap();

    assert_eq!(m.session(1).unwrap().status, RaceStatus::Racing);
    assert_eq!(m.session(1).unwrap().cards_drawn, 1);
    assert_eq!(m.session(2).unwrap().status, RaceStatus::Betting);
    assert_eq!(m.session(2).unwrap().deck.len(), 52);

    assert!(matches!(
        m.draw_card(2, 0),
        Err(ManagerError::Engine(EngineError::NotRacing))
    ));
}

#[test]
fn create_session_twice_replaces_state_including_bonus() {
    let mut m = manager();
    let mut rng = DummyRng;
    m.create_session(1, &mut rng);
    m.claim_bonus(1).unwrap();
    assert!(m.session(1).unwrap().bonus_claimed);

    m.create_session(1, &mut rng);
    assert!(!m.session(1).unwrap().bonus_claimed);
    assert_eq!(m.claim_bonus(1).unwrap(), Chips(50));
}

#[test]
fn get_or_create_keeps_existing_session() {
    let mut m = manager();
    let mut rng = DummyRng;

    m.get_or_create(5, &mut rng).bonus_claimed = true;
    assert!(m.has_session(5));
    assert!(m.get_or_create(5, &mut rng).bonus_claimed);
    assert_eq!(m.session_count(), 1);
}

#[test]
fn destroy_session_drops_everything() {
    let mut m = manager();
    let mut rng = DummyRng;
    m.create_session(3, &mut rng);
    m.claim_bonus(3).unwrap();

    let removed = m.destroy_session(3).unwrap();
    assert!(removed.bonus_claimed);
    assert!(!m.has_session(3));
    assert!(m.destroy_session(3).is_none());
}

#[test]
fn full_race_through_manager() {
    let mut m = manager();
    let mut rng = DeterministicRng::from_u64(2024);
    m.create_session(1, &mut rng);
    m.start_race(1, bets_on(Suit::Diamonds, 20), &mut rng).unwrap();

    let mut winner = None;
    for ts in 0..52 {
        let drawn = m.draw_card(1, ts).unwrap();
        if drawn.winner.is_some() {
            winner = drawn.winner;
            break;
        }
    }
    let winner = winner.expect("race must finish before the deck runs out");

    let settlement = m.settle_race(1, &mut rng).unwrap();
    assert_eq!(settlement.winner, winner);
    if winner == Suit::Diamonds {
        assert!(settlement.winnings >= Chips(20));
    } else {
        assert_eq!(settlement.winnings, Chips::ZERO);
    }

    let session = m.session(1).unwrap();
    assert_eq!(session.status, RaceStatus::Betting);
    assert_eq!(session.results.len(), 1);
}

#[test]
fn restore_session_puts_snapshot_back() {
    let mut m = manager();
    let mut rng = DummyRng;
    m.create_session(8, &mut rng);
    m.claim_bonus(8).unwrap();
    let snapshot = m.destroy_session(8).unwrap();

    m.restore_session(snapshot);
    assert_eq!(m.claim_bonus(8).unwrap_err(), ManagerError::Engine(EngineError::AlreadyClaimed));
}

#[test]
fn session_restored_from_raw_snapshot_keeps_bonus_and_history() {
    let mut rng = DummyRng;
    let mut first = manager();
    first.create_session(3, &mut rng);
    first.claim_bonus(3).unwrap();
    first.start_race(3, bets_on(Suit::Spades, 10), &mut rng).unwrap();
    for _ in 0..7 {
        first.draw_card(3, 100).unwrap();
    }
    first.settle_race(3, &mut rng).unwrap();

    let mut storage = InMemoryRaceStorage::new();
    storage.save_session(first.session(3).unwrap()).unwrap();
    let raw = storage.raw_snapshot(3).unwrap().to_string();

    // Новый процесс: снапшот пришёл с диска.
    let mut fresh_storage = InMemoryRaceStorage::new();
    fresh_storage.put_raw_snapshot(3, raw);
    let session = fresh_storage.load_session(3).unwrap().unwrap();

    let mut second = manager();
    second.restore_session(session);
    assert!(second.has_session(3));
    assert_eq!(
        second.claim_bonus(3),
        Err(ManagerError::Engine(EngineError::AlreadyClaimed))
    );

    let restored = second.session(3).unwrap();
    assert_eq!(restored.status, RaceStatus::Betting);
    assert_eq!(restored.results.len(), 1);
    assert_eq!(restored.races_played, 1);
}
