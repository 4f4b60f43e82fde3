//! Battle use cases.
//!
//! `StartBattle` opens the difficulty prompt; `ResolveBattle` draws the
//! roll, applies the outcome, and persists. Both work on a snapshot and
//! commit it back only after a successful save, so a failed save never
//! leaves a half-applied record behind.

use std::sync::Arc;

use idlebot_domain::game::battle;
use idlebot_domain::{Difficulty, PendingState, User};
use idlebot_shared::Reply;
use tracing::{debug, info};

use crate::infrastructure::ports::{RandomPort, RepoError};
use crate::stores::UserStore;
use crate::use_cases::replies;

/// Open a battle: move to the difficulty-selection state.
pub struct StartBattle {
    store: Arc<UserStore>,
}

impl StartBattle {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, user: &mut User) -> Result<Reply, RepoError> {
        let mut updated = user.clone();
        updated.pending = PendingState::AwaitingDifficulty;
        self.store.save(&updated).await?;
        *user = updated;

        debug!(external_id = %user.external_id, "battle started, awaiting difficulty");
        Ok(replies::difficulty_prompt())
    }
}

/// Resolve a chosen difficulty against a percentile roll.
pub struct ResolveBattle {
    store: Arc<UserStore>,
    random: Arc<dyn RandomPort>,
}

impl ResolveBattle {
    pub fn new(store: Arc<UserStore>, random: Arc<dyn RandomPort>) -> Self {
        Self { store, random }
    }

    pub async fn execute(
        &self,
        user: &mut User,
        difficulty: Difficulty,
    ) -> Result<Reply, RepoError> {
        let roll = self.random.gen_range(1, 100);
        let outcome = battle::resolve(user, difficulty, roll);

        let mut updated = user.clone();
        updated.apply_battle(&outcome);
        self.store.save(&updated).await?;
        *user = updated;

        info!(
            external_id = %user.external_id,
            difficulty = %difficulty,
            success = outcome.success,
            gold_delta = outcome.gold_delta,
            "battle resolved"
        );
        Ok(replies::battle_result(&outcome, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::clock::{FixedRandom, SystemClock};
    use crate::infrastructure::memory::MemoryUserRepo;

    fn fixture(roll: i64) -> (Arc<MemoryUserRepo>, Arc<UserStore>, ResolveBattle) {
        let repo = Arc::new(MemoryUserRepo::new());
        let store = Arc::new(UserStore::new(repo.clone(), Arc::new(SystemClock::new())));
        let resolve = ResolveBattle::new(store.clone(), Arc::new(FixedRandom(roll)));
        (repo, store, resolve)
    }

    #[tokio::test]
    async fn test_start_battle_persists_pending_state() {
        let repo = Arc::new(MemoryUserRepo::new());
        let store = Arc::new(UserStore::new(repo.clone(), Arc::new(SystemClock::new())));
        let start = StartBattle::new(store.clone());

        let mut user = store.get_or_create("u1").await.unwrap();
        let reply = start.execute(&mut user).await.unwrap();

        assert!(reply.has_options());
        assert_eq!(
            repo.snapshot("u1").unwrap().pending,
            PendingState::AwaitingDifficulty
        );
    }

    #[tokio::test]
    async fn test_resolve_success_awards_gold_and_returns_to_idle() {
        let (repo, store, resolve) = fixture(1);
        let mut user = store.get_or_create("u1").await.unwrap();
        user.pending = PendingState::AwaitingDifficulty;

        let reply = resolve.execute(&mut user, Difficulty::Easy).await.unwrap();

        assert!(reply.text.contains("성공"));
        let stored = repo.snapshot("u1").unwrap();
        assert_eq!(stored.gold, 110);
        assert_eq!(stored.pending, PendingState::Idle);
    }

    #[tokio::test]
    async fn test_resolve_failure_keeps_gold() {
        let (repo, store, resolve) = fixture(100);
        let mut user = store.get_or_create("u1").await.unwrap();
        user.pending = PendingState::AwaitingDifficulty;

        let reply = resolve.execute(&mut user, Difficulty::Hard).await.unwrap();

        assert!(reply.text.contains("실패"));
        let stored = repo.snapshot("u1").unwrap();
        assert_eq!(stored.gold, 100);
        assert_eq!(stored.pending, PendingState::Idle);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_record_unchanged() {
        let (repo, store, resolve) = fixture(1);
        let mut user = store.get_or_create("u1").await.unwrap();
        user.pending = PendingState::AwaitingDifficulty;
        store.save(&user).await.unwrap();

        repo.set_fail_saves(true);
        let result = resolve.execute(&mut user, Difficulty::Easy).await;

        assert!(result.is_err());
        let stored = repo.snapshot("u1").unwrap();
        assert_eq!(stored.gold, 100);
        assert_eq!(stored.pending, PendingState::AwaitingDifficulty);
        // the in-memory snapshot was not committed either
        assert_eq!(user.gold, 100);
    }
}
