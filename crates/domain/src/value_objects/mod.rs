//! Value objects for the bot domain.

mod command;
mod difficulty;
mod outcome;
mod pending;

pub use command::Command;
pub use difficulty::Difficulty;
pub use outcome::{BattleOutcome, EnhanceOutcome};
pub use pending::PendingState;
