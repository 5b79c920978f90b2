use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::dto::StandingDto;
use crate::api::errors::ApiError;
use crate::config::GameConfig;
use crate::domain::board::ShiftDirection;
use crate::engine::{RandomSource, ShiftPokerSession};

/// Команда верхнего уровня: всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую партию.
    StartGame(GameConfig),
    /// Сдвинуть общий ряд.
    Shift(ShiftDirection),
    /// Обменять одну открытую карту на карту ряда.
    Swap { hand_index: usize, middle_index: usize },
    /// Обменять все открытые карты на ряд.
    SwapAll,
    /// Не менять карты.
    Pass,
    /// Принудительно передать ход.
    NextPlayer,
    /// Принудительно завершить партию.
    EndGame,
    /// Выделить карту ряда (только для фронта).
    SelectMiddleCard(usize),
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,
    /// Партия завершилась этой командой.
    GameOver(Vec<StandingDto>),
}

/// Выполнить команду над сессией.
///
/// Если команда закрыла партию (явно или последним ходом последнего круга),
/// в ответе приходит итоговая таблица.
pub fn execute_command<R: RandomSource>(
    session: &mut ShiftPokerSession<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let was_active = session.is_active();

    match command {
        Command::StartGame(config) => session.start_game(&config)?,
        Command::Shift(direction) => session.shift(direction)?,
        Command::Swap {
            hand_index,
            middle_index,
        } => session.swap(hand_index, middle_index)?,
        Command::SwapAll => session.swap_all()?,
        Command::Pass => session.pass_turn()?,
        Command::NextPlayer => session.next_player()?,
        Command::EndGame => {
            session.end_game()?;
        }
        Command::SelectMiddleCard(index) => session.select_middle_card(index)?,
    }

    match session.last_result() {
        Some(standings) if was_active && !session.is_active() => Ok(CommandResponse::GameOver(
            standings.iter().map(StandingDto::from).collect(),
        )),
        _ => Ok(CommandResponse::Ok),
    }
}

/// Парсинг текстовой команды из терминала:
/// `shift left|right`, `swap <hand> <middle>`, `swapall`, `pass`,
/// `next`, `end`, `select <middle>`.
impl FromStr for Command {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let bad = || ApiError::BadRequest(format!("Неизвестная команда: {s}"));
        let index = |raw: &str| {
            raw.parse::<usize>()
                .map_err(|_| ApiError::BadRequest(format!("Индекс должен быть числом: {raw}")))
        };

        match parts.as_slice() {
            ["shift", "left" | "l"] => Ok(Command::Shift(ShiftDirection::Left)),
            ["shift", "right" | "r"] => Ok(Command::Shift(ShiftDirection::Right)),
            ["swap", h, m] => Ok(Command::Swap {
                hand_index: index(*h)?,
                middle_index: index(*m)?,
            }),
            ["swapall"] | ["swap", "all"] => Ok(Command::SwapAll),
            ["pass"] => Ok(Command::Pass),
            ["next"] => Ok(Command::NextPlayer),
            ["end"] => Ok(Command::EndGame),
            ["select", m] => Ok(Command::SelectMiddleCard(index(*m)?)),
            _ => Err(bad()),
        }
    }
}
