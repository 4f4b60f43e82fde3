//! Enhancement use cases.
//!
//! `StartEnhance` quotes the cost and moves to the confirmation state
//! (or rejects outright on a gold shortage, staying idle). The quoted
//! cost travels in the pending context so `ResolveEnhance` charges
//! exactly what was confirmed.

use std::sync::Arc;

use idlebot_domain::game::enhance;
use idlebot_domain::{PendingState, User};
use idlebot_shared::Reply;
use tracing::{debug, info};

use crate::infrastructure::ports::{RandomPort, RepoError};
use crate::stores::UserStore;
use crate::use_cases::replies;

/// Quote an enhancement and ask for confirmation.
pub struct StartEnhance {
    store: Arc<UserStore>,
}

impl StartEnhance {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, user: &mut User) -> Result<Reply, RepoError> {
        let cost = enhance::cost(user.weapon_level);
        if user.gold < cost {
            debug!(
                external_id = %user.external_id,
                cost,
                gold = user.gold,
                "enhancement rejected, not enough gold"
            );
            return Ok(replies::enhance_shortage(user, cost));
        }

        let mut updated = user.clone();
        updated.pending = PendingState::AwaitingEnhanceConfirm { cost };
        self.store.save(&updated).await?;
        *user = updated;

        debug!(external_id = %user.external_id, cost, "enhancement quoted, awaiting confirm");
        Ok(replies::enhance_quote(user, cost))
    }
}

/// Resolve a confirmed enhancement against a percentile roll.
pub struct ResolveEnhance {
    store: Arc<UserStore>,
    random: Arc<dyn RandomPort>,
}

impl ResolveEnhance {
    pub fn new(store: Arc<UserStore>, random: Arc<dyn RandomPort>) -> Self {
        Self { store, random }
    }

    pub async fn execute(&self, user: &mut User, quoted_cost: i64) -> Result<Reply, RepoError> {
        let roll = self.random.gen_range(1, 100);
        let outcome = enhance::resolve(user, quoted_cost, roll);

        let mut updated = user.clone();
        updated.apply_enhance(&outcome);
        self.store.save(&updated).await?;
        *user = updated;

        info!(
            external_id = %user.external_id,
            success = outcome.success,
            weapon_level = user.weapon_level,
            gold_spent = outcome.gold_spent,
            "enhancement resolved"
        );
        Ok(replies::enhance_result(&outcome, user))
    }
}
