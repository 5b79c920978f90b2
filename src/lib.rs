//! Движок правил Shift Poker (2–4 игрока).
//!
//! Слои:
//! - `domain`: карты, колода, игроки, стол, партия;
//! - `eval`: категория 5-карточной руки;
//! - `engine`: фазы хода, переходы, итоги, уведомления подписчикам;
//! - `api`: команды/запросы/DTO для фронта и CLI;
//! - `infra`: RNG;
//! - `config`: параметры партии.
//!
//! Никакого I/O внутри: всё приходит прямыми вызовами, наружу уходят события.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use config::GameConfig;
pub use engine::{EngineError, GameEvent, ShiftPokerSession, Standing};
pub use eval::{evaluate_hand, HandCategory};
