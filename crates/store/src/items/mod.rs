//! Item storage.

use async_trait::async_trait;

use stockdesk_core::{Item, ItemId};

use crate::error::StoreError;

pub mod memory;
pub mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

/// Storage for inventory items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a new item. Fails with [`StoreError::Duplicate`] if the id is
    /// already present.
    async fn insert(&self, item: &Item) -> Result<(), StoreError>;

    /// Fetch one item by id.
    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Fetch every item, ordered by id.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Overwrite all mutable fields of an existing item. Returns false if no
    /// row matched the id (nothing was changed).
    async fn update(&self, item: &Item) -> Result<bool, StoreError>;

    /// Delete by id. Returns false if no row matched.
    async fn delete(&self, id: ItemId) -> Result<bool, StoreError>;
}
