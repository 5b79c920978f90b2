// src/engine/session.rs

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::domain::board::ShiftDirection;
use crate::domain::card::Card;
use crate::domain::game::ShiftPokerGame;
use crate::domain::player::Player;
use crate::engine::actions::{self, ActionOutcome, PlayerActionKind};
use crate::engine::errors::EngineError;
use crate::engine::events::{EventBus, GameEvent, GameObserver, SubscriberId};
use crate::engine::lifecycle::{self, Standing, TurnAdvance};
use crate::engine::validation::validate_middle_index;
use crate::engine::RandomSource;
use crate::eval::{evaluate_cards, HandCategory};
use crate::infra::rng::SystemRng;

/// Контекст одной «комнаты» Shift Poker:
/// - владеет не более чем одной активной партией;
/// - рассылает события подписчикам;
/// - держит RNG для перемешивания игроков и колоды.
///
/// Никакого глобального состояния: сессию создают явно и передают туда, где она нужна.
/// Внутренних блокировок нет, вызовы должен сериализовать владелец.
pub struct ShiftPokerSession<R = SystemRng> {
    game: Option<ShiftPokerGame>,
    /// Итоги последней завершённой партии.
    last_result: Option<Vec<Standing>>,
    events: EventBus,
    rng: R,
}

impl ShiftPokerSession<SystemRng> {
    pub fn new() -> Self {
        Self::with_rng(SystemRng)
    }
}

impl Default for ShiftPokerSession<SystemRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> ShiftPokerSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            game: None,
            last_result: None,
            events: EventBus::new(),
            rng,
        }
    }

    // ----- подписки -----

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriberId {
        self.events.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    // ----- чтение -----

    /// Активная партия (None до старта и после завершения).
    pub fn game(&self) -> Option<&ShiftPokerGame> {
        self.game.as_ref()
    }

    /// Прямой доступ к партии: для тестов и редакторов расстановки.
    /// Инварианты партии при этом на совести вызывающего.
    pub fn game_mut(&mut self) -> Option<&mut ShiftPokerGame> {
        self.game.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.game.as_ref().map(|g| g.current())
    }

    /// Итоги последней завершённой партии (сбрасываются при новом старте).
    pub fn last_result(&self) -> Option<&[Standing]> {
        self.last_result.as_deref()
    }

    // ----- жизненный цикл -----

    /// Начать новую партию. Прежняя партия (если была) заменяется.
    ///
    /// При неверном конфиге ничего не меняется и события не рассылаются.
    pub fn start_game(&mut self, config: &GameConfig) -> Result<(), EngineError> {
        let game = lifecycle::deal_new_game(config, &mut self.rng).map_err(|err| {
            debug!(%err, "start_game rejected");
            err
        })?;

        let players: Vec<String> = game.players.iter().map(|p| p.name.clone()).collect();
        let rounds = game.rounds;
        info!(?players, rounds, "game started");

        self.game = Some(game);
        self.last_result = None;
        self.events.publish(&GameEvent::GameStarted { players, rounds });
        self.events.publish(&GameEvent::RoundStarted {
            remaining_rounds: rounds,
        });
        Ok(())
    }

    /// Передать ход следующему игроку.
    ///
    /// Если круг замкнулся и раунды кончились, партия завершается
    /// (вместо `NextPlayer` рассылается `GameEnded`).
    pub fn next_player(&mut self) -> Result<(), EngineError> {
        let game = self.game.as_mut().ok_or(EngineError::NoActiveGame)?;

        match lifecycle::advance_turn(game) {
            TurnAdvance::NextPlayer { current_player } => {
                let name = game.players[current_player].name.clone();
                debug!(current_player, %name, "next player");
                self.events.publish(&GameEvent::NextPlayer {
                    current_player,
                    name,
                });
            }
            TurnAdvance::NewRound {
                current_player,
                remaining_rounds,
            } => {
                let name = game.players[current_player].name.clone();
                info!(remaining_rounds, "new round");
                self.events
                    .publish(&GameEvent::RoundStarted { remaining_rounds });
                self.events.publish(&GameEvent::NextPlayer {
                    current_player,
                    name,
                });
            }
            TurnAdvance::RoundsExhausted => {
                self.end_game()?;
            }
        }
        Ok(())
    }

    /// Завершить партию: посчитать итоги, сбросить партию, разослать `GameEnded`.
    pub fn end_game(&mut self) -> Result<Vec<Standing>, EngineError> {
        let game = self.game.take().ok_or(EngineError::NoActiveGame)?;
        let standings = lifecycle::calc_result(&game);

        if let Some(top) = standings.first() {
            info!(winner = %top.player_name, category = %top.category, "game ended");
        }

        self.last_result = Some(standings.clone());
        self.events.publish(&GameEvent::GameEnded {
            standings: standings.clone(),
        });
        Ok(standings)
    }

    /// Текущие итоги без изменения партии.
    pub fn calc_result(&self) -> Result<Vec<Standing>, EngineError> {
        let game = self.game.as_ref().ok_or(EngineError::NoActiveGame)?;
        Ok(lifecycle::calc_result(game))
    }

    /// Категория произвольной 5-карточной руки.
    pub fn evaluate_hand(&self, cards: &[Card]) -> Result<HandCategory, EngineError> {
        evaluate_cards(cards).ok_or(EngineError::InvalidHandSize(cards.len()))
    }

    // ----- действия игрока -----

    pub fn shift(&mut self, direction: ShiftDirection) -> Result<(), EngineError> {
        self.apply_action(PlayerActionKind::Shift(direction))
    }

    pub fn swap(&mut self, hand_index: usize, middle_index: usize) -> Result<(), EngineError> {
        self.apply_action(PlayerActionKind::Swap {
            hand_index,
            middle_index,
        })
    }

    pub fn swap_all(&mut self) -> Result<(), EngineError> {
        self.apply_action(PlayerActionKind::SwapAll)
    }

    pub fn pass_turn(&mut self) -> Result<(), EngineError> {
        self.apply_action(PlayerActionKind::Pass)
    }

    /// Применить действие текущего игрока, разослать событие,
    /// и после обмена/паса передать ход.
    pub fn apply_action(&mut self, action: PlayerActionKind) -> Result<(), EngineError> {
        let game = self.game.as_mut().ok_or(EngineError::NoActiveGame)?;
        let player = game.current_player;

        let outcome = actions::apply_action(game, action).map_err(|err| {
            match err {
                // При допустимом конфиге добора всегда хватает.
                EngineError::DrawPileEmpty => warn!(?action, player, "draw pile exhausted"),
                _ => debug!(%err, ?action, player, "action rejected"),
            }
            err
        })?;

        match outcome {
            ActionOutcome::Shifted {
                direction,
                discarded,
                drawn,
            } => {
                debug!(player, %direction, %discarded, %drawn, "shifted");
                self.events.publish(&GameEvent::Shifted {
                    player,
                    direction,
                    discarded,
                    drawn,
                });
                Ok(())
            }
            ActionOutcome::TurnFinished(kind) => {
                debug!(player, ?kind, "turn finished");
                self.events.publish(&GameEvent::Swapped { player, kind });
                self.next_player()
            }
        }
    }

    /// Выделение карты ряда во фронте. Партию не меняет.
    pub fn select_middle_card(&mut self, middle_index: usize) -> Result<(), EngineError> {
        if self.game.is_none() {
            return Err(EngineError::NoActiveGame);
        }
        validate_middle_index(middle_index)?;
        self.events
            .publish(&GameEvent::MiddleCardSelected { middle_index });
        Ok(())
    }
}
