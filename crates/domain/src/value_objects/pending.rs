//! Pending-state value object.
//!
//! The multi-turn dialogue mode a user is currently in. Modeled as an
//! explicit enum with a small context payload rather than free-form
//! session flags; the enhance confirmation carries the cost that was
//! quoted so the resolve step charges exactly what the user accepted.

use serde::{Deserialize, Serialize};

/// Multi-turn dialogue state for a user.
///
/// Persisted alongside the user record; `Idle` maps to a NULL column in
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingState {
    /// No dialogue in progress; every top-level command is valid.
    #[default]
    Idle,
    /// A battle was started; the next expected input is a difficulty.
    AwaitingDifficulty,
    /// An enhancement was quoted; the next expected input is the
    /// confirmation. `cost` is the quoted price in gold.
    AwaitingEnhanceConfirm { cost: i64 },
}

impl PendingState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
