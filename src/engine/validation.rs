use crate::domain::chips::Chips;
use crate::domain::lanes::SuitMap;
use crate::engine::errors::EngineError;

/// Проверка ставок перед стартом гонки.
///
/// Движок требует только одно: сумма > 0. Проверка против баланса —
/// ответственность вызывающего (движок баланс не хранит).
pub fn validate_bets(bets: &SuitMap<Chips>) -> Result<Chips, EngineError> {
    let total: Chips = bets.values().sum();
    if total.is_zero() {
        return Err(EngineError::InvalidBet(
            "сумма ставок должна быть больше нуля".into(),
        ));
    }
    Ok(total)
}

/// Перевод "сырых" сумм с провода (могут быть отрицательными) в ставки.
pub fn bets_from_signed(raw: &SuitMap<i64>) -> Result<SuitMap<Chips>, EngineError> {
    if let Some((suit, amount)) = raw.iter().find(|(_, a)| *a < 0) {
        return Err(EngineError::InvalidBet(format!(
            "отрицательная ставка на {}: {amount}",
            suit.lane_name()
        )));
    }
    Ok(raw.map(|_, a| Chips(a as u64)))
}
