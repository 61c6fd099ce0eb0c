//! In-memory contact message store for dev mode and black-box tests.

use std::sync::Mutex;

use async_trait::async_trait;

use stockdesk_core::ContactMessage;

use crate::error::StoreError;

use super::MessageStore;

#[derive(Default)]
pub struct MemoryMessageStore {
    messages: Mutex<Vec<ContactMessage>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything inserted so far (insertion order).
    pub fn all(&self) -> Vec<ContactMessage> {
        self.messages
            .lock()
            .expect("message store lock poisoned")
            .clone()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn insert(&self, message: &ContactMessage) -> Result<(), StoreError> {
        self.messages
            .lock()
            .expect("message store lock poisoned")
            .push(message.clone());
        Ok(())
    }
}
