//! Postgres-backed contact message store.

use async_trait::async_trait;
use sqlx::PgPool;

use stockdesk_core::ContactMessage;

use crate::error::StoreError;

use super::MessageStore;

pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn insert(&self, message: &ContactMessage) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, title, message, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.title)
        .bind(&message.message)
        .bind(message.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
