//! User store wrapper.
//!
//! Fronts the `UserRepo` port with the concurrency discipline the rest
//! of the engine relies on: the dispatcher holds the per-user guard for
//! the whole read-modify-write cycle, so two events for the same user
//! can never both act on the same pending-state snapshot. Locks are
//! keyed by external id; different users never contend. The lock map
//! grows monotonically, one entry per user ever seen, and is never
//! pruned; user records are never deleted either, so the map tracks
//! the user table.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use idlebot_domain::User;

use crate::infrastructure::ports::{ClockPort, RepoError, UserRepo};

/// Repository wrapper with per-user critical sections.
pub struct UserStore {
    repo: Arc<dyn UserRepo>,
    clock: Arc<dyn ClockPort>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl UserStore {
    pub fn new(repo: Arc<dyn UserRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            repo,
            clock,
            locks: DashMap::new(),
        }
    }

    /// Acquire the critical section for one external id.
    ///
    /// The guard must span the caller's whole get-mutate-save cycle.
    pub async fn lock(&self, external_id: &str) -> OwnedMutexGuard<()> {
        let mutex = self
            .locks
            .entry(external_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        mutex.lock_owned().await
    }

    /// Return the stored record, creating and persisting the default
    /// record on first contact. Idempotent.
    pub async fn get_or_create(&self, external_id: &str) -> Result<User, RepoError> {
        if let Some(user) = self.repo.get(external_id).await? {
            return Ok(user);
        }
        let user = User::new(external_id, self.clock.now());
        self.repo.create(&user).await?;
        tracing::info!(external_id, "created new user record");
        Ok(user)
    }

    /// Atomically overwrite the stored record.
    pub async fn save(&self, user: &User) -> Result<(), RepoError> {
        self.repo.save(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::infrastructure::clock::SystemClock;
    use crate::infrastructure::memory::MemoryUserRepo;

    fn store() -> (Arc<MemoryUserRepo>, UserStore) {
        let repo = Arc::new(MemoryUserRepo::new());
        let store = UserStore::new(repo.clone(), Arc::new(SystemClock::new()));
        (repo, store)
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let (_repo, store) = store();
        let first = store.get_or_create("u1").await.unwrap();
        let second = store.get_or_create("u1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_or_create_persists_before_returning() {
        let (repo, store) = store();
        store.get_or_create("u1").await.unwrap();
        assert!(repo.snapshot("u1").is_some());
    }

    #[tokio::test]
    async fn test_get_or_create_uses_injected_clock() {
        use chrono::TimeZone;

        use crate::infrastructure::clock::FixedClock;

        let at = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let store = UserStore::new(
            Arc::new(MemoryUserRepo::new()),
            Arc::new(FixedClock(at)),
        );
        let user = store.get_or_create("u1").await.unwrap();
        assert_eq!(user.created_at, at);
    }

    #[tokio::test]
    async fn test_get_error_propagates() {
        use crate::infrastructure::ports::MockUserRepo;

        let mut repo = MockUserRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::Database("connection refused".to_string())));

        let store = UserStore::new(Arc::new(repo), Arc::new(SystemClock::new()));
        assert!(matches!(
            store.get_or_create("u1").await,
            Err(RepoError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_same_user_locks_serialize() {
        let (_repo, store) = store();
        let guard = store.lock("u1").await;
        let blocked =
            tokio::time::timeout(Duration::from_millis(20), store.lock("u1")).await;
        assert!(blocked.is_err());
        drop(guard);
        assert!(
            tokio::time::timeout(Duration::from_millis(20), store.lock("u1"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_different_users_do_not_contend() {
        let (_repo, store) = store();
        let _guard = store.lock("u1").await;
        assert!(
            tokio::time::timeout(Duration::from_millis(20), store.lock("u2"))
                .await
                .is_ok()
        );
    }
}
