//! Resolver outcome value objects.
//!
//! Ephemeral per-request results; they update the user record and feed
//! the reply templates, but are never persisted themselves.

use serde::{Deserialize, Serialize};

use crate::value_objects::Difficulty;

/// Result of a resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub difficulty: Difficulty,
    pub success: bool,
    /// Gold change applied to the user (zero on failure).
    pub gold_delta: i64,
    /// Level after the outcome was applied.
    pub new_level: i64,
    /// Whether the outcome pushed the user over a level threshold.
    pub leveled_up: bool,
}

/// Result of a resolved enhancement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceOutcome {
    pub prior_level: i64,
    pub new_level: i64,
    pub success: bool,
    /// Gold charged for the attempt (spent on failure too).
    pub gold_spent: i64,
    /// Success chance that applied, in whole percent.
    pub success_percent: i64,
}

impl EnhanceOutcome {
    /// An enhancement never destroys the item under the current policy.
    pub fn item_destroyed(&self) -> bool {
        false
    }
}
