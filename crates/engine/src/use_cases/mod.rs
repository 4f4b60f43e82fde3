//! Use cases: event dispatch and the battle/enhance flows.

pub mod battle;
pub mod dispatch;
pub mod enhance;
pub mod replies;

pub use battle::{ResolveBattle, StartBattle};
pub use dispatch::HandleEvent;
pub use enhance::{ResolveEnhance, StartEnhance};
