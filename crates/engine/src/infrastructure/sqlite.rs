//! SQLite user repository.
//!
//! One row per user in a `users` table; the pending state is stored as a
//! JSON column (NULL = idle) so the schema stays a plain relational
//! table. The table is created on connect.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use idlebot_domain::{PendingState, User};

use crate::infrastructure::ports::{RepoError, UserRepo};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        external_id  TEXT PRIMARY KEY,
        level        INTEGER NOT NULL DEFAULT 1,
        gold         INTEGER NOT NULL DEFAULT 100,
        weapon_level INTEGER NOT NULL DEFAULT 0,
        created_at   TEXT NOT NULL,
        pending      TEXT
    )
";

/// sqlx-backed repository over a SQLite file.
pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    /// Open (creating if missing) the database at `path` and ensure the
    /// schema exists.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(db_err)?;
        sqlx::query(SCHEMA).execute(&pool).await.map_err(db_err)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl UserRepo for SqliteUserRepo {
    async fn get(&self, external_id: &str) -> Result<Option<User>, RepoError> {
        let row = sqlx::query(
            "SELECT external_id, level, gold, weapon_level, created_at, pending \
             FROM users WHERE external_id = ?",
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(row_to_user).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT INTO users (external_id, level, gold, weapon_level, created_at, pending) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.external_id)
        .bind(user.level)
        .bind(user.gold)
        .bind(user.weapon_level)
        .bind(user.created_at.to_rfc3339())
        .bind(pending_to_sql(user.pending)?)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), RepoError> {
        let result = sqlx::query(
            "UPDATE users SET level = ?, gold = ?, weapon_level = ?, pending = ? \
             WHERE external_id = ?",
        )
        .bind(user.level)
        .bind(user.gold)
        .bind(user.weapon_level)
        .bind(pending_to_sql(user.pending)?)
        .bind(&user.external_id)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

fn db_err(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

fn pending_to_sql(pending: PendingState) -> Result<Option<String>, RepoError> {
    if pending.is_idle() {
        return Ok(None);
    }
    serde_json::to_string(&pending)
        .map(Some)
        .map_err(|e| RepoError::Serialization(e.to_string()))
}

fn row_to_user(row: SqliteRow) -> Result<User, RepoError> {
    let created_at: String = row.try_get("created_at").map_err(db_err)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| RepoError::Serialization(e.to_string()))?
        .with_timezone(&Utc);

    let pending: Option<String> = row.try_get("pending").map_err(db_err)?;
    let pending = match pending {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| RepoError::Serialization(e.to_string()))?,
        None => PendingState::Idle,
    };

    Ok(User {
        external_id: row.try_get("external_id").map_err(db_err)?,
        level: row.try_get("level").map_err(db_err)?,
        gold: row.try_get("gold").map_err(db_err)?,
        weapon_level: row.try_get("weapon_level").map_err(db_err)?,
        created_at,
        pending,
    })
}
