use crate::domain::card::{Card, Rank, Suit};

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = rank.value().saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        let idx = r.saturating_sub(2);
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Гистограмма руки: сколько карт каждого ранга и каждой масти.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankCounts {
    /// Индексы 0..14, используем 2..14.
    by_rank: [u8; 15],
    /// 0:clubs, 1:diamonds, 2:hearts, 3:spades.
    by_suit: [u8; 4],
    mask: RankMask,
    total: u8,
}

impl RankCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut by_rank = [0u8; 15];
        let mut by_suit = [0u8; 4];
        let mut mask: RankMask = 0;

        for card in cards {
            by_rank[card.rank.value() as usize] += 1;
            by_suit[suit_index(card.suit)] += 1;
            mask |= rank_to_bit(card.rank);
        }

        Self {
            by_rank,
            by_suit,
            mask,
            total: cards.len() as u8,
        }
    }

    /// Сколько карт ранга `rank`.
    pub fn count(&self, rank: Rank) -> u8 {
        self.by_rank[rank.value() as usize]
    }

    /// Максимум карт одного ранга.
    pub fn max_of_a_kind(&self) -> u8 {
        self.by_rank.iter().copied().max().unwrap_or(0)
    }

    /// Сколько РАЗНЫХ рангов встречается хотя бы `n` раз.
    pub fn ranks_with_at_least(&self, n: u8) -> usize {
        self.by_rank.iter().filter(|&&c| c >= n).count()
    }

    pub fn mask(&self) -> RankMask {
        self.mask
    }

    /// Все карты одной масти.
    pub fn single_suit(&self) -> bool {
        self.total > 0 && self.by_suit.iter().any(|&c| c == self.total)
    }

    /// Отсортированные по возрастанию ранги идут подряд без пропусков.
    ///
    /// Туз только старший: A-2-3-4-5 стритом не считается.
    pub fn consecutive(&self) -> bool {
        if self.total == 0 || self.mask.count_ones() != u32::from(self.total) {
            // повторы рангов ломают последовательность
            return false;
        }
        let run = self.mask >> self.mask.trailing_zeros();
        run == (1u16 << self.total) - 1
    }
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}
