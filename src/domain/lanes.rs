use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::domain::card::Suit;

/// Значение на каждую из четырёх дорожек (мастей).
///
/// Используется для progress / remaining / bets / odds — везде, где в
/// прототипах был объект `{ hearts, diamonds, clubs, spades }`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SuitMap<T> {
    #[serde(default)]
    pub hearts: T,
    #[serde(default)]
    pub diamonds: T,
    #[serde(default)]
    pub clubs: T,
    #[serde(default)]
    pub spades: T,
}

impl<T: Copy> SuitMap<T> {
    /// Одно и то же значение на всех дорожках.
    pub const fn splat(value: T) -> Self {
        Self {
            hearts: value,
            diamonds: value,
            clubs: value,
            spades: value,
        }
    }

    /// Пары (масть, значение) в порядке сканирования дорожек.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, T)> + '_ {
        Suit::ALL.into_iter().map(move |s| (s, self[s]))
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        Suit::ALL.into_iter().map(move |s| self[s])
    }

    pub fn map<U>(&self, mut f: impl FnMut(Suit, T) -> U) -> SuitMap<U> {
        SuitMap {
            hearts: f(Suit::Hearts, self.hearts),
            diamonds: f(Suit::Diamonds, self.diamonds),
            clubs: f(Suit::Clubs, self.clubs),
            spades: f(Suit::Spades, self.spades),
        }
    }
}

impl<T> SuitMap<T> {
    /// Собрать карту, вычислив значение для каждой масти.
    pub fn from_fn(mut f: impl FnMut(Suit) -> T) -> Self {
        Self {
            hearts: f(Suit::Hearts),
            diamonds: f(Suit::Diamonds),
            clubs: f(Suit::Clubs),
            spades: f(Suit::Spades),
        }
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &T {
        match suit {
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
            Suit::Spades => &self.spades,
        }
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut T {
        match suit {
            Suit::Hearts => &mut self.hearts,
            Suit::Diamonds => &mut self.diamonds,
            Suit::Clubs => &mut self.clubs,
            Suit::Spades => &mut self.spades,
        }
    }
}
