//! Уведомления для внешних подписчиков (фронт, CLI, логгер истории).
//!
//! Событие рассылается синхронно, после того как мутация полностью применена,
//! всем подписчикам в порядке регистрации.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::domain::board::ShiftDirection;
use crate::domain::card::Card;
use crate::domain::SeatIndex;
use crate::engine::actions::SwapKind;
use crate::engine::lifecycle::Standing;

/// Событие партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEvent {
    /// Партия началась. Имена в итоговом порядке хода.
    GameStarted { players: Vec<String>, rounds: u8 },

    /// Начался новый круг.
    RoundStarted { remaining_rounds: u8 },

    /// Игрок сдвинул общий ряд.
    Shifted {
        player: SeatIndex,
        direction: ShiftDirection,
        discarded: Card,
        drawn: Card,
    },

    /// Вторая фаза хода: обмен одной карты, всех карт или пас.
    Swapped { player: SeatIndex, kind: SwapKind },

    /// Ход перешёл к другому игроку.
    /// На последнем замыкании круга не рассылается: вместо него приходит `GameEnded`.
    NextPlayer {
        current_player: SeatIndex,
        name: String,
    },

    /// Во фронте выбрана карта ряда (состояние партии не меняется).
    MiddleCardSelected { middle_index: usize },

    /// Партия завершена.
    GameEnded { standings: Vec<Standing> },
}

/// Подписчик на события партии.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Идентификатор подписки, нужен для отписки.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// Синхронная рассылка событий нескольким подписчикам.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn GameObserver>)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, observer));
        id
    }

    /// `false`, если такой подписки нет.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, event: &GameEvent) {
        for (_, observer) in self.subscribers.iter_mut() {
            observer.on_event(event);
        }
    }
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEventRecord {
    pub index: u32,
    pub event: GameEvent,
}

/// История событий партии (для реплея и тестов).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEventRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GameEvent) {
        let index = self.events.len() as u32;
        self.events.push(GameEventRecord { index, event });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last().map(|r| &r.event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().map(|r| &r.event)
    }
}

/// Подписчик, складывающий события в общий `GameHistory`.
///
/// Клон рекордера пишет в тот же журнал: один отдаём в `EventBus`,
/// второй оставляем себе для чтения.
#[derive(Clone, Debug, Default)]
pub struct HistoryRecorder {
    history: Rc<RefCell<GameHistory>>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Снимок журнала на текущий момент.
    pub fn snapshot(&self) -> GameHistory {
        self.history.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.borrow().is_empty()
    }
}

impl GameObserver for HistoryRecorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.history.borrow_mut().push(event.clone());
    }
}
