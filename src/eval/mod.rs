//! Модуль оценки силы руки Shift Poker (5 карт: 3 открытые + 2 закрытые).
//!
//! Основная функция:
//!   `evaluate_hand(&[Card; 5]) -> HandCategory`
//!
//! Результат: только категория, без кикеров. Не зависит от состояния партии.

pub mod evaluator;
pub mod hand_category;
pub mod rank_counts;

pub use evaluator::{
    evaluate_cards, evaluate_hand, has_flush, has_four_of_a_kind, has_full_house, has_pair,
    has_royal_flush, has_straight, has_straight_flush, has_three_of_a_kind, has_two_pair, Hand,
};
pub use hand_category::HandCategory;
pub use rank_counts::{mask_from_ranks, rank_to_bit, RankCounts, RankMask};
