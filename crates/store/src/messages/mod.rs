//! Contact message storage (insert-only).

use async_trait::async_trait;

use stockdesk_core::ContactMessage;

use crate::error::StoreError;

pub mod memory;
pub mod postgres;

pub use memory::MemoryMessageStore;
pub use postgres::PgMessageStore;

/// Storage for contact messages. There are no read paths; the table is an
/// intake sink.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, message: &ContactMessage) -> Result<(), StoreError>;
}
