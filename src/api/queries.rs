use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::engine::{RandomSource, ShiftPokerSession};
use crate::eval::HandCategory;

use super::dto::{GameViewDto, StandingDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние стола глазами игрока `viewer` (его закрытые карты видны).
    GetGame { viewer: Option<String> },

    /// Текущие итоги активной партии.
    Standings,

    /// Итоги последней завершённой партии.
    LastResult,

    /// Категория произвольной руки из 5 карт.
    EvaluateHand { cards: Vec<Card> },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    /// `None`, если партии сейчас нет.
    Game(Option<GameViewDto>),
    Standings(Vec<StandingDto>),
    Hand(HandCategory),
}

/// Выполнить запрос. Сессия не меняется.
pub fn run_query<R: RandomSource>(
    session: &ShiftPokerSession<R>,
    query: &Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetGame { viewer } => Ok(QueryResponse::Game(
            session
                .game()
                .map(|g| GameViewDto::from_game(g, viewer.as_deref())),
        )),
        Query::Standings => {
            let standings = session.calc_result()?;
            Ok(QueryResponse::Standings(
                standings.iter().map(StandingDto::from).collect(),
            ))
        }
        Query::LastResult => Ok(QueryResponse::Standings(
            session
                .last_result()
                .unwrap_or_default()
                .iter()
                .map(StandingDto::from)
                .collect(),
        )),
        Query::EvaluateHand { cards } => Ok(QueryResponse::Hand(session.evaluate_hand(cards)?)),
    }
}
