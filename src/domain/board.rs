use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::MIDDLE_CARDS;

/// Сторона, в которую сдвигается общий ряд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    Left,
    Right,
}

impl fmt::Display for ShiftDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftDirection::Left => write!(f, "left"),
            ShiftDirection::Right => write!(f, "right"),
        }
    }
}

/// Общий ряд из трёх карт между сбросами.
///
/// Все операции возвращают новый ряд, исходный не трогается.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MiddleRow(pub [Card; MIDDLE_CARDS]);

impl MiddleRow {
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.0.get(index)
    }

    /// Сдвиг ряда:
    /// - Left:  [a, b, c] + x -> [b, c, x], наружу уходит `a`;
    /// - Right: [a, b, c] + x -> [x, a, b], наружу уходит `c`.
    pub fn shifted(&self, direction: ShiftDirection, incoming: Card) -> (MiddleRow, Card) {
        let [a, b, c] = self.0;
        match direction {
            ShiftDirection::Left => (MiddleRow([b, c, incoming]), a),
            ShiftDirection::Right => (MiddleRow([incoming, a, b]), c),
        }
    }

    /// Положить `card` на место `index`, вернуть новый ряд и вынутую карту.
    pub fn replaced(&self, index: usize, card: Card) -> Option<(MiddleRow, Card)> {
        let outgoing = *self.0.get(index)?;
        let mut next = self.0;
        next[index] = card;
        Some((MiddleRow(next), outgoing))
    }
}

/// Игровой стол: общий ряд, добор и два однокарточных сброса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub middle_cards: MiddleRow,
    /// Остаток колоды после раздачи; карты берутся спереди.
    pub draw_pile: Deck,
    /// Последняя карта, ушедшая влево. Старые сбросы затираются.
    pub discard_left: Option<Card>,
    /// Последняя карта, ушедшая вправо.
    pub discard_right: Option<Card>,
}

impl Board {
    pub fn new(middle_cards: [Card; MIDDLE_CARDS], draw_pile: Deck) -> Self {
        Self {
            middle_cards: MiddleRow(middle_cards),
            draw_pile,
            discard_left: None,
            discard_right: None,
        }
    }

    /// Сброс со стороны `direction`.
    pub fn discard(&self, direction: ShiftDirection) -> Option<Card> {
        match direction {
            ShiftDirection::Left => self.discard_left,
            ShiftDirection::Right => self.discard_right,
        }
    }
}
