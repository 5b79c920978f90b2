//! Действия игрока внутри хода: Shift → (Swap | SwapAll | Pass).
//!
//! Функции здесь только проверяют и мутируют `ShiftPokerGame`.
//! Переход хода и уведомления делает `session`.

use serde::{Deserialize, Serialize};

use crate::domain::board::ShiftDirection;
use crate::domain::card::Card;
use crate::domain::game::ShiftPokerGame;
use crate::engine::errors::{EngineError, IndexKind};
use crate::engine::validation::{
    require_not_shifted, require_shifted, validate_hand_index, validate_middle_index,
};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    /// Сдвинуть общий ряд влево/вправо (обязательно, один раз за ход).
    Shift(ShiftDirection),
    /// Поменять одну открытую карту на одну карту ряда.
    Swap { hand_index: usize, middle_index: usize },
    /// Поменять все три открытые карты на весь ряд.
    SwapAll,
    /// Ничего не менять.
    Pass,
}

/// Как закончилась вторая фаза хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwapKind {
    One { hand_index: usize, middle_index: usize },
    All,
    Pass,
}

/// Результат применённого действия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionOutcome {
    Shifted {
        direction: ShiftDirection,
        /// Карта, ушедшая в сброс.
        discarded: Card,
        /// Карта, взятая из добора.
        drawn: Card,
    },
    /// Ход закончен, нужно передать его следующему.
    TurnFinished(SwapKind),
}

/// Применить действие текущего игрока.
pub fn apply_action(
    game: &mut ShiftPokerGame,
    action: PlayerActionKind,
) -> Result<ActionOutcome, EngineError> {
    match action {
        PlayerActionKind::Shift(direction) => shift(game, direction),
        PlayerActionKind::Swap {
            hand_index,
            middle_index,
        } => swap(game, hand_index, middle_index),
        PlayerActionKind::SwapAll => swap_all(game),
        PlayerActionKind::Pass => pass_turn(game),
    }
}

/// Крайняя карта ряда уходит в сброс своей стороны (затирая прежнюю),
/// две оставшиеся сдвигаются к ней, освободившееся место занимает верх добора.
pub fn shift(
    game: &mut ShiftPokerGame,
    direction: ShiftDirection,
) -> Result<ActionOutcome, EngineError> {
    require_not_shifted(game)?;
    let drawn = *game
        .board
        .draw_pile
        .front()
        .ok_or(EngineError::DrawPileEmpty)?;

    let (row, discarded) = game.board.middle_cards.shifted(direction, drawn);

    // Всё проверено, применяем.
    game.board.draw_pile.draw_one();
    game.board.middle_cards = row;
    match direction {
        ShiftDirection::Left => game.board.discard_left = Some(discarded),
        ShiftDirection::Right => game.board.discard_right = Some(discarded),
    }
    game.current_mut().has_shifted = true;

    Ok(ActionOutcome::Shifted {
        direction,
        discarded,
        drawn,
    })
}

/// Обмен одной открытой карты на одну карту ряда.
pub fn swap(
    game: &mut ShiftPokerGame,
    hand_index: usize,
    middle_index: usize,
) -> Result<ActionOutcome, EngineError> {
    validate_hand_index(hand_index)?;
    validate_middle_index(middle_index)?;
    require_shifted(game)?;

    let from_hand = game.current().open_cards[hand_index];
    let (row, from_middle) = game
        .board
        .middle_cards
        .replaced(middle_index, from_hand)
        .ok_or(EngineError::IndexOutOfRange {
            kind: IndexKind::Middle,
            index: middle_index,
        })?;

    game.board.middle_cards = row;
    game.current_mut().open_cards[hand_index] = from_middle;

    Ok(ActionOutcome::TurnFinished(SwapKind::One {
        hand_index,
        middle_index,
    }))
}

/// Открытая рука и общий ряд меняются целиком, порядок сохраняется попарно.
pub fn swap_all(game: &mut ShiftPokerGame) -> Result<ActionOutcome, EngineError> {
    require_shifted(game)?;

    let hand = game.current().open_cards;
    let middle = game.board.middle_cards.0;
    game.board.middle_cards.0 = hand;
    game.current_mut().open_cards = middle;

    Ok(ActionOutcome::TurnFinished(SwapKind::All))
}

pub fn pass_turn(game: &mut ShiftPokerGame) -> Result<ActionOutcome, EngineError> {
    require_shifted(game)?;
    Ok(ActionOutcome::TurnFinished(SwapKind::Pass))
}
