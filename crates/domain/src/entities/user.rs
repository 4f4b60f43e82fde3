//! User entity - one record per platform user.
//!
//! Created lazily on first contact, never deleted in normal operation.
//! All mutation happens through outcome application inside the caller's
//! per-user critical section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BattleOutcome, EnhanceOutcome, PendingState};

/// Gold required per derived level step.
const GOLD_PER_LEVEL: i64 = 200;

/// Per-user game state, keyed by the platform's stable user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier assigned by the chat platform.
    pub external_id: String,
    pub level: i64,
    pub gold: i64,
    pub weapon_level: i64,
    pub created_at: DateTime<Utc>,
    /// Current multi-turn dialogue state.
    pub pending: PendingState,
}

impl User {
    /// Create a fresh record with the starting stats.
    ///
    /// The timestamp is injected so repositories can share a clock port.
    pub fn new(external_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            external_id: external_id.into(),
            level: 1,
            gold: 100,
            weapon_level: 0,
            created_at,
            pending: PendingState::Idle,
        }
    }

    /// Level implied by accumulated gold. Levels never go down.
    pub fn derived_level(gold: i64) -> i64 {
        1 + gold / GOLD_PER_LEVEL
    }

    /// Apply a battle outcome: add the reward and re-derive the level.
    pub fn apply_battle(&mut self, outcome: &BattleOutcome) {
        self.gold += outcome.gold_delta;
        self.level = self.level.max(Self::derived_level(self.gold));
        self.pending = PendingState::Idle;
    }

    /// Apply an enhancement outcome: charge the cost and move the level.
    pub fn apply_enhance(&mut self, outcome: &EnhanceOutcome) {
        self.gold -= outcome.gold_spent;
        self.weapon_level = outcome.new_level;
        self.pending = PendingState::Idle;
    }
}
