//! Contact message record (write-only from the system's perspective).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generated identifier for a contact message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Mint a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered), so messages sort roughly by submission
    /// time without relying on the timestamp as the key itself.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for MessageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A submitted contact message.
///
/// There are no read/update/delete operations for these; rows are only ever
/// inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build a message with a freshly minted id.
    pub fn new(
        name: String,
        email: String,
        title: String,
        message: String,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            name,
            email,
            title,
            message,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_distinct() {
        assert_ne!(MessageId::new(), MessageId::new());
    }

    #[test]
    fn new_message_carries_submission_time() {
        let now = Utc::now();
        let msg = ContactMessage::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "Hello".to_string(),
            "Just checking in.".to_string(),
            now,
        );
        assert_eq!(msg.submitted_at, now);
    }
}
