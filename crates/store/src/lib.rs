//! `stockdesk-store` — storage gateway.
//!
//! One pooled Postgres connection source, parameterized statements, typed
//! errors. Each table family gets a trait plus a Postgres and an in-memory
//! implementation; wiring picks one at startup.

pub mod config;
pub mod error;
pub mod items;
pub mod messages;

pub use config::{ConfigError, DbConfig};
pub use error::StoreError;
pub use items::{ItemStore, MemoryItemStore, PgItemStore};
pub use messages::{MemoryMessageStore, MessageStore, PgMessageStore};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open a bounded connection pool against `url`.
pub async fn connect_pool(url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(url)
        .await?;
    tracing::info!("database pool ready");
    Ok(pool)
}
