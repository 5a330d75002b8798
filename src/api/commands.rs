use serde::{Deserialize, Serialize};

use crate::domain::lanes::SuitMap;
use crate::domain::PlayerId;

/// Ставки в том виде, в каком они приходят с провода.
///
/// Знаковые суммы: отрицательную ставку отклоняем явно, а не молча
/// обрезаем при десериализации. Отсутствующие масти = 0.
pub type BetsInput = SuitMap<i64>;

/// Команда верхнего уровня (входящие интенты клиента).
///
/// Эти команды превращаются в операции (`RaceOperation`), а off-chain —
/// приходят из socket-событий `start-race`, `draw-card`, `claim-bonus`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Игрок подключился: создать (или пересоздать) сессию.
    CreateSession(CreateSessionCommand),

    /// Игрок отключился: закрыть сессию.
    DestroySession(DestroySessionCommand),

    /// Сделать ставки и запустить гонку.
    StartRace(StartRaceCommand),

    /// Вытянуть следующую карту.
    DrawCard(DrawCardCommand),

    /// Получить разовый бонус.
    ClaimBonus(ClaimBonusCommand),
}

impl Command {
    pub fn player_id(&self) -> PlayerId {
        match self {
            Command::CreateSession(c) => c.player_id,
            Command::DestroySession(c) => c.player_id,
            Command::StartRace(c) => c.player_id,
            Command::DrawCard(c) => c.player_id,
            Command::ClaimBonus(c) => c.player_id,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSessionCommand {
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestroySessionCommand {
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartRaceCommand {
    pub player_id: PlayerId,
    #[serde(default)]
    pub bets: BetsInput,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawCardCommand {
    pub player_id: PlayerId,
    /// Время запроса (секунды). Попадает в историю, если карта завершит гонку.
    #[serde(default)]
    pub timestamp: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimBonusCommand {
    pub player_id: PlayerId,
}
