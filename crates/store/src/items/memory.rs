//! In-memory item store for dev mode and black-box tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use stockdesk_core::{Item, ItemId};

use crate::error::StoreError;

use super::ItemStore;

/// In-memory item store. BTreeMap keeps iteration ordered by id, matching
/// the Postgres `ORDER BY id`.
#[derive(Default)]
pub struct MemoryItemStore {
    items: Mutex<BTreeMap<ItemId, Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, item: &Item) -> Result<(), StoreError> {
        let mut items = self.items.lock().expect("item store lock poisoned");
        if items.contains_key(&item.id) {
            return Err(StoreError::Duplicate(item.id.to_string()));
        }
        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let items = self.items.lock().expect("item store lock poisoned");
        Ok(items.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.lock().expect("item store lock poisoned");
        Ok(items.values().cloned().collect())
    }

    async fn update(&self, item: &Item) -> Result<bool, StoreError> {
        let mut items = self.items.lock().expect("item store lock poisoned");
        match items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let mut items = self.items.lock().expect("item store lock poisoned");
        Ok(items.remove(&id).is_some())
    }
}
