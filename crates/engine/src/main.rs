//! Idlebot engine - local entry point.
//!
//! The production webhook layer lives elsewhere; this binary wires the
//! core against the SQLite store and runs a line-based console loop for
//! local testing: each stdin line is handled as an utterance from a
//! fixed user id and the reply payload is printed as JSON.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idlebot_engine::infrastructure::{SqliteUserRepo, SystemClock, SystemRandom};
use idlebot_engine::App;
use idlebot_shared::InboundEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "idlebot_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = std::env::var("IDLEBOT_DB").unwrap_or_else(|_| "users.db".into());
    let external_id =
        std::env::var("IDLEBOT_LOCAL_USER").unwrap_or_else(|_| "local-console".into());

    tracing::info!(db_path = %db_path, "starting idlebot engine console");
    let repo = Arc::new(SqliteUserRepo::connect(&db_path).await?);
    let app = App::new(
        repo,
        Arc::new(SystemClock::new()),
        Arc::new(SystemRandom::new()),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = app
            .handle(&InboundEvent::new(external_id.clone(), line))
            .await;
        println!("{}", serde_json::to_string_pretty(&reply)?);
    }

    Ok(())
}
