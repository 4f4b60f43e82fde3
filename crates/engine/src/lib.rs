//! Idlebot engine library.
//!
//! Server-side core of the chat-RPG bot.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port traits and their adapters (SQLite, memory,
//!   clock, random)
//! - `stores/` - Store wrappers with the per-user locking discipline
//! - `use_cases/` - Event dispatch and the battle/enhance flows
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
