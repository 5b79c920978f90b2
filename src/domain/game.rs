use serde::{Deserialize, Serialize};

use crate::domain::board::Board;
use crate::domain::player::Player;

/// Состояние одной партии Shift Poker.
///
/// Создаётся в `engine::lifecycle::deal_new_game`, дальше мутируется на месте
/// действиями игроков и переходами хода. Игроки и стол принадлежат только партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftPokerGame {
    /// Порядок игроков фиксируется один раз при старте (перемешивание имён).
    pub players: Vec<Player>,
    pub board: Board,
    /// Индекс текущего игрока в `players`.
    pub current_player: usize,
    /// Сколько полных кругов ещё осталось.
    pub rounds: u8,
}

impl ShiftPokerGame {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }
}
