//! Opaque session token derivation.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Derive a fresh opaque token for a session issued at `now`.
///
/// The token is the SHA-256 hex digest (64 characters) of the issue instant
/// plus a per-issue UUIDv7 nonce, so two logins in the same instant still
/// receive distinct tokens.
pub fn derive_token(now: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(now.timestamp_nanos_opt().unwrap_or_default().to_be_bytes());
    hasher.update(Uuid::now_v7().as_bytes());
    hex::encode(hasher.finalize())
}
