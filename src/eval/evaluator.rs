use crate::domain::card::{Card, Rank};
use crate::domain::HAND_SIZE;

use super::hand_category::HandCategory;
use super::rank_counts::RankCounts;

/// Рука для оценки: ровно 5 карт, порядок не важен.
pub type Hand = [Card; HAND_SIZE];

/// Главная функция: категория 5-карточной руки.
///
/// Категории проверяются от сильнейшей к слабейшей, первая подходящая
/// побеждает; `HighCard` подходит всегда.
pub fn evaluate_hand(hand: &Hand) -> HandCategory {
    let counts = RankCounts::from_cards(hand);
    HandCategory::BY_PRIORITY
        .into_iter()
        .find(|&category| matches_category(category, hand, &counts))
        .unwrap_or(HandCategory::HighCard)
}

/// То же самое для среза произвольной длины. `None`, если карт не 5.
pub fn evaluate_cards(cards: &[Card]) -> Option<HandCategory> {
    let hand: &Hand = cards.try_into().ok()?;
    Some(evaluate_hand(hand))
}

fn matches_category(category: HandCategory, hand: &Hand, counts: &RankCounts) -> bool {
    match category {
        HandCategory::RoyalFlush => is_royal_flush(hand, counts),
        HandCategory::StraightFlush => is_straight_flush(counts),
        HandCategory::FourOfAKind => is_four_of_a_kind(counts),
        HandCategory::FullHouse => is_full_house(counts),
        HandCategory::Flush => counts.single_suit(),
        HandCategory::Straight => counts.consecutive(),
        HandCategory::ThreeOfAKind => is_three_of_a_kind(counts),
        HandCategory::TwoPair => is_two_pair(counts),
        HandCategory::Pair => is_pair(counts),
        HandCategory::HighCard => true,
    }
}

// Предикаты по отдельности. Каждый проверяет только своё условие,
// старшинство категорий решает `evaluate_hand`.

pub fn has_royal_flush(hand: &Hand) -> bool {
    is_royal_flush(hand, &RankCounts::from_cards(hand))
}

pub fn has_straight_flush(hand: &Hand) -> bool {
    is_straight_flush(&RankCounts::from_cards(hand))
}

pub fn has_four_of_a_kind(hand: &Hand) -> bool {
    is_four_of_a_kind(&RankCounts::from_cards(hand))
}

pub fn has_full_house(hand: &Hand) -> bool {
    is_full_house(&RankCounts::from_cards(hand))
}

pub fn has_flush(hand: &Hand) -> bool {
    RankCounts::from_cards(hand).single_suit()
}

pub fn has_straight(hand: &Hand) -> bool {
    RankCounts::from_cards(hand).consecutive()
}

pub fn has_three_of_a_kind(hand: &Hand) -> bool {
    is_three_of_a_kind(&RankCounts::from_cards(hand))
}

pub fn has_two_pair(hand: &Hand) -> bool {
    is_two_pair(&RankCounts::from_cards(hand))
}

pub fn has_pair(hand: &Hand) -> bool {
    is_pair(&RankCounts::from_cards(hand))
}

fn is_royal_flush(hand: &Hand, counts: &RankCounts) -> bool {
    is_straight_flush(counts) && hand.iter().any(|c| c.rank == Rank::Ace)
}

fn is_straight_flush(counts: &RankCounts) -> bool {
    counts.consecutive() && counts.single_suit()
}

fn is_four_of_a_kind(counts: &RankCounts) -> bool {
    counts.max_of_a_kind() >= 4
}

/// Сет плюс пара другого ранга.
fn is_full_house(counts: &RankCounts) -> bool {
    counts.ranks_with_at_least(3) >= 1 && counts.ranks_with_at_least(2) >= 2
}

fn is_three_of_a_kind(counts: &RankCounts) -> bool {
    counts.max_of_a_kind() >= 3
}

/// Две пары РАЗНЫХ рангов: один ранг не считается двумя парами.
fn is_two_pair(counts: &RankCounts) -> bool {
    counts.ranks_with_at_least(2) >= 2
}

fn is_pair(counts: &RankCounts) -> bool {
    counts.max_of_a_kind() >= 2
}
