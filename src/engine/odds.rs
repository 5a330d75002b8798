use crate::domain::lanes::SuitMap;
use crate::domain::odds::Odds;

/// Пересчёт коэффициентов по оставшимся картам.
///
/// odds = clamp(4.0 × total / (remaining_in_suit × 4), 1.0, 10.0),
/// округление до 0.1 (half-up). Пустая масть считается как 1 карта,
/// поэтому её коэффициент упирается в 10.0.
///
/// Чистая функция: одинаковый вход → одинаковый выход.
pub fn calculate_odds(remaining: &SuitMap<u8>) -> SuitMap<Odds> {
    let total: u32 = remaining.values().map(u32::from).sum();

    remaining.map(|_, in_suit| {
        let in_suit = u32::from(in_suit).max(1);
        // 4·total / (4·in_suit) в десятых, с округлением половинок вверх.
        let numerator = 4 * total * Odds::SCALE;
        let denominator = 4 * in_suit;
        let tenths = (2 * numerator + denominator) / (2 * denominator);
        Odds(tenths.clamp(Odds::MIN.0, Odds::MAX.0))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_is_fair() {
        let odds = calculate_odds(&SuitMap::splat(13));
        assert!(odds.values().all(|o| o == Odds::FAIR));
    }

    #[test]
    fn empty_suit_saturates_at_cap() {
        let remaining = SuitMap {
            hearts: 0,
            diamonds: 13,
            clubs: 13,
            spades: 13,
        };
        let odds = calculate_odds(&remaining);
        assert_eq!(odds.hearts, Odds::MAX);
        // 39 / 13 = 3.0
        assert_eq!(odds.spades, Odds(30));
    }

    #[test]
    fn rounds_to_one_decimal() {
        let remaining = SuitMap {
            hearts: 12,
            diamonds: 13,
            clubs: 13,
            spades: 13,
        };
        let odds = calculate_odds(&remaining);
        // 51 / 12 = 4.25 -> 4.3
        assert_eq!(odds.hearts, Odds(43));
        // 51 / 13 = 3.923 -> 3.9
        assert_eq!(odds.clubs, Odds(39));
    }

    #[test]
    fn all_empty_clamps_to_floor() {
        let odds = calculate_odds(&SuitMap::splat(0));
        assert!(odds.values().all(|o| o == Odds::MIN));
    }
}
