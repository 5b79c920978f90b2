use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене это просто упорядоченный список, карты берутся спереди.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: VecDeque<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = VecDeque::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Deck {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Верхняя карта (без снятия).
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Снять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Снять ровно `N` карт сверху. Если карт не хватает, колода не меняется.
    pub fn draw_array<const N: usize>(&mut self) -> Option<[Card; N]> {
        if self.cards.len() < N {
            return None;
        }
        let taken: Vec<Card> = self.cards.drain(..N).collect();
        taken.try_into().ok()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}
