//! Движок Shift Poker: фазы хода, переход хода/раунда, итоги, уведомления.
//!
//! Высокоуровневый объект: `ShiftPokerSession`
//! Основные операции:
//!   - `start_game` – раздать новую партию
//!   - `shift` / `swap` / `swap_all` / `pass_turn` – ход игрока
//!   - `next_player` / `end_game` / `calc_result` – переходы и итоги

pub mod actions;
pub mod errors;
pub mod events;
pub mod lifecycle;
pub mod session;
pub mod validation;

pub use actions::{ActionOutcome, PlayerActionKind, SwapKind};
pub use errors::{EngineError, ErrorKind, IndexKind};
pub use events::{
    EventBus, GameEvent, GameEventRecord, GameHistory, GameObserver, HistoryRecorder,
    SubscriberId,
};
pub use lifecycle::{advance_turn, calc_result, deal_new_game, winners, Standing, TurnAdvance};
pub use session::ShiftPokerSession;

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
