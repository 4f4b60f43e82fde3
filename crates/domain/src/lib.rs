//! Idlebot domain layer.
//!
//! Pure types and rules for the chat-RPG bot: the user record, the
//! pending-state machine vocabulary, command parsing, and the battle and
//! enhancement resolvers. Nothing in this crate does I/O or draws
//! randomness; resolvers take the roll as an argument so outcomes are
//! deterministic under test.

pub mod entities;
pub mod error;
pub mod game;
pub mod value_objects;

pub use entities::User;
pub use error::DomainError;
pub use value_objects::{
    BattleOutcome, Command, Difficulty, EnhanceOutcome, PendingState,
};
