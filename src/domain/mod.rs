//! Доменная модель Shift Poker: карты, колода, игроки, стол и сама партия.

pub mod board;
pub mod card;
pub mod deck;
pub mod game;
pub mod player;

/// Индекс игрока в порядке хода.
pub type SeatIndex = usize;

/// Открытых карт у игрока.
pub const OPEN_CARDS: usize = 3;
/// Закрытых карт у игрока.
pub const HIDDEN_CARDS: usize = 2;
/// Карт в общем ряду.
pub const MIDDLE_CARDS: usize = 3;
/// Размер полной руки для оценки.
pub const HAND_SIZE: usize = OPEN_CARDS + HIDDEN_CARDS;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const MIN_ROUNDS: u8 = 2;
pub const MAX_ROUNDS: u8 = 7;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use board::*;
pub use card::*;
pub use deck::*;
pub use game::*;
pub use player::*;
