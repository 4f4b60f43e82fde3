//! In-memory user repository.
//!
//! Used by tests and demo mode. Carries two injectable faults for the
//! atomicity and serialization properties: saves can be made to fail,
//! and saves can be slowed down to widen race windows.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use idlebot_domain::User;

use crate::infrastructure::ports::{RepoError, UserRepo};

/// DashMap-backed repository with injectable save faults.
#[derive(Default)]
pub struct MemoryUserRepo {
    users: DashMap<String, User>,
    fail_saves: AtomicBool,
    save_delay_ms: AtomicU64,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail with a database error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Sleep for `delay` inside every subsequent `save`.
    pub fn set_save_delay(&self, delay: Duration) {
        self.save_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Direct snapshot of a stored record, for assertions.
    pub fn snapshot(&self, external_id: &str) -> Option<User> {
        self.users.get(external_id).map(|r| r.clone())
    }
}

#[async_trait]
impl UserRepo for MemoryUserRepo {
    async fn get(&self, external_id: &str) -> Result<Option<User>, RepoError> {
        Ok(self.users.get(external_id).map(|r| r.clone()))
    }

    async fn create(&self, user: &User) -> Result<(), RepoError> {
        match self.users.entry(user.external_id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(RepoError::Database(format!(
                "duplicate user: {}",
                user.external_id
            ))),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(())
            }
        }
    }

    async fn save(&self, user: &User) -> Result<(), RepoError> {
        let delay_ms = self.save_delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepoError::Database("injected save failure".to_string()));
        }
        let mut entry = self
            .users
            .get_mut(&user.external_id)
            .ok_or(RepoError::NotFound)?;
        *entry = user.clone();
        Ok(())
    }
}
