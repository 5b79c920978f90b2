//! Жизненный цикл партии: раздача, переход хода/раунда, подсчёт итогов.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::domain::board::Board;
use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::game::ShiftPokerGame;
use crate::domain::player::Player;
use crate::domain::{SeatIndex, HAND_SIZE};
use crate::engine::errors::EngineError;
use crate::engine::validation::validate_config;
use crate::engine::RandomSource;
use crate::eval::{evaluate_hand, HandCategory};

/// Что произошло после передачи хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnAdvance {
    /// Ход перешёл внутри текущего круга.
    NextPlayer { current_player: SeatIndex },
    /// Круг замкнулся, начался новый раунд.
    NewRound {
        current_player: SeatIndex,
        remaining_rounds: u8,
    },
    /// Круг замкнулся и раунды закончились: партию пора завершать.
    RoundsExhausted,
}

/// Итоговое место игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    /// Место с 1. Игроки с одинаковой категорией делят место.
    pub place: u8,
    /// Позиция игрока в порядке хода.
    pub seat: SeatIndex,
    pub player_name: String,
    pub category: HandCategory,
    /// 3 открытые + 2 закрытые.
    pub cards: [Card; HAND_SIZE],
}

/// Новая партия по конфигу:
/// - перемешивает порядок игроков;
/// - собирает и тасует колоду;
/// - раздаёт каждому 3 открытые + 2 закрытые карты, затем 3 карты в ряд;
/// - остаток колоды становится добором.
///
/// Конфиг проверяется до любых действий.
pub fn deal_new_game<R: RandomSource>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<ShiftPokerGame, EngineError> {
    validate_config(config)?;

    let mut names = config.player_names.clone();
    rng.shuffle(&mut names);

    let mut deck = Deck::standard_52();
    rng.shuffle(deck.cards.make_contiguous());

    let mut players = Vec::with_capacity(names.len());
    for name in names {
        let open = deck.draw_array().ok_or(EngineError::DrawPileEmpty)?;
        let hidden = deck.draw_array().ok_or(EngineError::DrawPileEmpty)?;
        players.push(Player::new(name, open, hidden));
    }
    let middle = deck.draw_array().ok_or(EngineError::DrawPileEmpty)?;

    Ok(ShiftPokerGame {
        players,
        board: Board::new(middle, deck),
        current_player: 0,
        rounds: config.rounds,
    })
}

/// Передать ход следующему игроку по кругу.
///
/// На замыкании круга (возврат к индексу 0) уменьшает `rounds`.
/// У нового текущего игрока сбрасывается `has_shifted`.
pub fn advance_turn(game: &mut ShiftPokerGame) -> TurnAdvance {
    let next = (game.current_player + 1) % game.player_count();
    game.current_player = next;
    game.players[next].has_shifted = false;

    if next != 0 {
        return TurnAdvance::NextPlayer {
            current_player: next,
        };
    }

    game.rounds = game.rounds.saturating_sub(1);
    if game.rounds == 0 {
        TurnAdvance::RoundsExhausted
    } else {
        TurnAdvance::NewRound {
            current_player: next,
            remaining_rounds: game.rounds,
        }
    }
}

/// Итоги: категория руки каждого игрока, по убыванию силы.
///
/// Сортировка стабильная: при равной категории сохраняется порядок хода.
/// Состояние партии не меняется.
pub fn calc_result(game: &ShiftPokerGame) -> Vec<Standing> {
    let mut scored: Vec<(SeatIndex, &Player, [Card; HAND_SIZE], HandCategory)> = game
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            let cards = p.full_hand();
            (seat, p, cards, evaluate_hand(&cards))
        })
        .collect();

    scored.sort_by(|a, b| b.3.cmp(&a.3));

    let mut standings: Vec<Standing> = Vec::with_capacity(scored.len());
    for (idx, (seat, player, cards, category)) in scored.into_iter().enumerate() {
        let place = match standings.last() {
            Some(prev) if prev.category == category => prev.place,
            _ => (idx + 1) as u8,
        };
        standings.push(Standing {
            place,
            seat,
            player_name: player.name.clone(),
            category,
            cards,
        });
    }
    standings
}

/// Лучшие по категории (группа победителей при ничьей).
pub fn winners(standings: &[Standing]) -> &[Standing] {
    let n = standings.iter().take_while(|s| s.place == 1).count();
    &standings[..n]
}
