use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::game::ShiftPokerGame;
use crate::domain::{SeatIndex, HIDDEN_CARDS, MIDDLE_CARDS, OPEN_CARDS};
use crate::engine::Standing;
use crate::eval::HandCategory;

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub seat: SeatIndex,
    pub name: String,
    pub open_cards: [Card; OPEN_CARDS],
    /// Закрытые карты – только для "героя".
    pub hidden_cards: Option<[Card; HIDDEN_CARDS]>,
    pub has_shifted: bool,
}

/// DTO стола целиком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub players: Vec<PlayerViewDto>,
    pub middle_cards: [Card; MIDDLE_CARDS],
    pub discard_left: Option<Card>,
    pub discard_right: Option<Card>,
    pub draw_pile_size: usize,
    pub current_player: SeatIndex,
    pub remaining_rounds: u8,
}

impl GameViewDto {
    /// Снимок партии глазами `viewer` (имя игрока). `None`: закрытые карты скрыты у всех.
    pub fn from_game(game: &ShiftPokerGame, viewer: Option<&str>) -> Self {
        let players = game
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| PlayerViewDto {
                seat,
                name: p.name.clone(),
                open_cards: p.open_cards,
                hidden_cards: (viewer == Some(p.name.as_str())).then_some(p.hidden_cards),
                has_shifted: p.has_shifted,
            })
            .collect();

        Self {
            players,
            middle_cards: game.board.middle_cards.0,
            discard_left: game.board.discard_left,
            discard_right: game.board.discard_right,
            draw_pile_size: game.board.draw_pile.len(),
            current_player: game.current_player,
            remaining_rounds: game.rounds,
        }
    }
}

/// Строка итоговой таблицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingDto {
    pub place: u8,
    pub player_name: String,
    pub category: HandCategory,
    /// Человекочитаемое название категории.
    pub hand_name: String,
    pub cards: Vec<Card>,
}

impl From<&Standing> for StandingDto {
    fn from(s: &Standing) -> Self {
        Self {
            place: s.place,
            player_name: s.player_name.clone(),
            category: s.category,
            hand_name: s.category.name().to_string(),
            cards: s.cards.to_vec(),
        }
    }
}
