// src/bin/race_dev_cli.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::{error, info};

use card_race_engine::api::{
    ClaimBonusCommand, Command, CreateSessionCommand, DestroySessionCommand, DrawCardCommand,
    Query, QueryResponse, RaceDesk, RaceEvent, StartRaceCommand,
};
use card_race_engine::domain::{Chips, Deck, PlayerId, Suit, SuitMap};
use card_race_engine::engine::{RaceConfig, RaceSession, SessionManager};
use card_race_engine::infra::{
    BalanceLedger, BurnPolicy, IdGenerator, InMemoryLedger, InMemoryRaceStorage, RaceStorage,
    RngSeed,
};

/// Dev-симуляция карточных гонок: несколько игроков, по несколько гонок каждый.
#[derive(Parser, Debug)]
#[command(name = "race_dev_cli")]
struct Args {
    /// Сколько игроков.
    #[arg(long, default_value_t = 3)]
    players: u32,

    /// Сколько гонок на игрока.
    #[arg(long, default_value_t = 3)]
    races: u32,

    /// Базовый seed (одинаковый seed → одинаковые гонки).
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Стартовый баланс каждого игрока.
    #[arg(long, default_value_t = 100)]
    balance: u64,

    /// JSON с RaceConfig (необязательно).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Печатать события в JSON, как их отдал бы сокет.
    #[arg(long)]
    json: bool,

    /// Каталог со снапшотами сессий: читаем при старте игрока, пишем в конце.
    #[arg(long)]
    snapshots: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("race_dev_cli: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
            serde_json::from_str::<RaceConfig>(&raw).map_err(|e| format!("bad config: {e}"))?
        }
        None => RaceConfig::default(),
    };

    let manager = SessionManager::new(config).map_err(|e| e.to_string())?;
    let mut desk = RaceDesk::new(manager, InMemoryLedger::new(), BurnPolicy::default());
    let ids = IdGenerator::new();
    let base_seed = RngSeed::from_u64(args.seed);
    let mut storage = InMemoryRaceStorage::new();

    if let Some(dir) = &args.snapshots {
        fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    }

    info!(
        players = args.players,
        races = args.races,
        draws_to_finish = desk.manager().config().draws_to_finish(),
        "starting simulation"
    );

    for n in 0..args.players {
        let player_id = ids.next_player_id();
        desk.ledger_mut().credit(player_id, Chips(args.balance));

        let mut rng = base_seed.derive(player_id, 0).to_rng();
        let restored = match &args.snapshots {
            Some(dir) => restore_snapshot(&mut storage, dir, player_id)?,
            None => None,
        };
        match restored {
            Some(session) => {
                info!(
                    player_id,
                    races_played = session.races_played,
                    "session restored from snapshot"
                );
                desk.manager_mut().restore_session(session);
            }
            None => emit(args, player_id, desk.handle_or_report(
                Command::CreateSession(CreateSessionCommand { player_id }),
                &mut rng,
            )),
        }
        emit(args, player_id, desk.handle_or_report(
            Command::ClaimBonus(ClaimBonusCommand { player_id }),
            &mut rng,
        ));

        for race in 1..=u64::from(args.races) {
            let mut rng = base_seed.derive(player_id, race).to_rng();
            let favourite = Suit::ALL[(n as usize + race as usize) % Suit::ALL.len()];
            let mut bets = SuitMap::splat(0i64);
            bets[favourite] = 10;

            let started = desk.handle_or_report(
                Command::StartRace(StartRaceCommand { player_id, bets }),
                &mut rng,
            );
            let failed = started.iter().any(|e| matches!(e, RaceEvent::Error { .. }));
            emit(args, player_id, started);
            if failed {
                break;
            }

            // Дольше колоды гонка не бывает: дальше только DeckExhausted.
            for _ in 0..Deck::FULL_SIZE {
                let events = desk.handle_or_report(
                    Command::DrawCard(DrawCardCommand {
                        player_id,
                        timestamp: now_secs(),
                    }),
                    &mut rng,
                );
                let done = events
                    .iter()
                    .any(|e| matches!(e, RaceEvent::RaceFinished(_) | RaceEvent::Error { .. }));
                emit(args, player_id, events);
                if done {
                    break;
                }
            }
        }

        if let Ok(QueryResponse::Results(results)) = desk.query(&Query::GetResults { player_id }) {
            println!("--- player {player_id}: {} race(s) in history", results.len());
            for r in results {
                println!(
                    "    #{} winner={:?} bet={} odds={:.1} winnings={} cards={}",
                    r.race_number, r.winner, r.bet.0, r.odds, r.winnings.0, r.cards_drawn
                );
            }
        }
        println!(
            "--- player {player_id}: balance {}",
            desk.ledger().balance(player_id).0
        );

        if let (Some(dir), Some(session)) = (&args.snapshots, desk.manager().session(player_id)) {
            save_snapshot(&mut storage, dir, session)?;
        }

        emit(args, player_id, desk.handle_or_report(
            Command::DestroySession(DestroySessionCommand { player_id }),
            &mut rng,
        ));
    }

    println!("=== burned total: {} ===", desk.ledger().total_burned().0);
    Ok(())
}

fn snapshot_path(dir: &Path, player_id: PlayerId) -> PathBuf {
    dir.join(format!("player-{player_id}.json"))
}

fn restore_snapshot(
    storage: &mut InMemoryRaceStorage,
    dir: &Path,
    player_id: PlayerId,
) -> Result<Option<RaceSession>, String> {
    let path = snapshot_path(dir, player_id);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    storage.put_raw_snapshot(player_id, raw);

    let session = storage
        .load_session(player_id)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    match session {
        Some(session) if session.player_id != player_id => Err(format!(
            "{}: снапшот принадлежит игроку {}",
            path.display(),
            session.player_id
        )),
        other => Ok(other),
    }
}

fn save_snapshot(
    storage: &mut InMemoryRaceStorage,
    dir: &Path,
    session: &RaceSession,
) -> Result<(), String> {
    storage.save_session(session).map_err(|e| e.to_string())?;
    let path = snapshot_path(dir, session.player_id);
    if let Some(raw) = storage.raw_snapshot(session.player_id) {
        fs::write(&path, raw).map_err(|e| format!("{}: {e}", path.display()))?;
    }
    Ok(())
}

fn emit(args: &Args, player_id: PlayerId, events: Vec<RaceEvent>) {
    for event in events {
        if args.json {
            match serde_json::to_string(&event) {
                Ok(line) => println!("[{player_id}] {line}"),
                Err(err) => error!("cannot encode event: {err}"),
            }
        } else {
            println!("[{player_id}] {event:?}");
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
