//! Postgres-backed item store.
//!
//! The `websec` table is created externally (see `schema.sql` at the repo
//! root); this module only reads and writes it.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use stockdesk_core::{Item, ItemId};

use crate::error::{is_unique_violation, StoreError};

use super::ItemStore;

pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_item(row: sqlx::postgres::PgRow) -> Result<Item, StoreError> {
    Ok(Item {
        id: ItemId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        quantity: row.try_get("quantity")?,
    })
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn insert(&self, item: &Item) -> Result<(), StoreError> {
        let res = sqlx::query(
            r#"
            INSERT INTO websec (id, name, description, price, quantity)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(item.id.as_i64())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(item.quantity)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::Duplicate(item.id.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price, quantity
            FROM websec
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_item).transpose()
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, quantity
            FROM websec
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_item).collect()
    }

    async fn update(&self, item: &Item) -> Result<bool, StoreError> {
        let res = sqlx::query(
            r#"
            UPDATE websec
            SET name = $1, description = $2, price = $3, quantity = $4
            WHERE id = $5
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(item.quantity)
        .bind(item.id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let res = sqlx::query("DELETE FROM websec WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }
}
