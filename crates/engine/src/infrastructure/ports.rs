//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - User persistence (SQLite in production, memory in tests - any store
//!   with atomic per-key read-modify-write satisfies the contract)
//! - Clock/Random (for testing)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use idlebot_domain::User;

// =============================================================================
// Error Types
// =============================================================================

/// Storage failure surfaced by repository adapters.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// Database Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get(&self, external_id: &str) -> Result<Option<User>, RepoError>;
    /// Insert a fresh record. Fails if the key already exists.
    async fn create(&self, user: &User) -> Result<(), RepoError>;
    /// Atomically overwrite the record for `user.external_id`.
    async fn save(&self, user: &User) -> Result<(), RepoError>;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomPort: Send + Sync {
    /// Uniform draw from the inclusive range `min..=max`.
    fn gen_range(&self, min: i64, max: i64) -> i64;
}
