use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::{HIDDEN_CARDS, OPEN_CARDS};

/// Игрок в Shift Poker.
///
/// Кроме имени и флага `has_shifted` у игрока две фиксированные руки:
/// открытые карты (меняются с общим рядом) и закрытые (видит только сам игрок).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub open_cards: [Card; OPEN_CARDS],
    pub hidden_cards: [Card; HIDDEN_CARDS],
    /// Сдвигал ли игрок общий ряд в текущем ходу. Сбрасывается в начале хода.
    pub has_shifted: bool,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        open_cards: [Card; OPEN_CARDS],
        hidden_cards: [Card; HIDDEN_CARDS],
    ) -> Self {
        Self {
            name: name.into(),
            open_cards,
            hidden_cards,
            has_shifted: false,
        }
    }

    /// Полная рука для оценки: 3 открытые + 2 закрытые.
    pub fn full_hand(&self) -> [Card; OPEN_CARDS + HIDDEN_CARDS] {
        let [o0, o1, o2] = self.open_cards;
        let [h0, h1] = self.hidden_cards;
        [o0, o1, o2, h0, h1]
    }
}
