//! Session store: token → session metadata with expiry.
//!
//! Concurrent logins each hold an independent, individually-expiring
//! session. Validation is parameterized on the clock so expiry is
//! deterministic to test.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::token::derive_token;

/// Metadata recorded for one issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("unknown token")]
    Unknown,

    #[error("session has expired")]
    Expired,
}

/// In-process session store.
///
/// Issuing a token never invalidates earlier ones; sessions end only by
/// expiry. Expired entries are pruned on each issue.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a new session for `username`, returning the opaque token.
    pub fn issue(&self, username: &str, now: DateTime<Utc>) -> String {
        let token = derive_token(now);
        let session = Session {
            username: username.to_string(),
            issued_at: now,
            expires_at: now + self.ttl,
        };

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(token.clone(), session);
        token
    }

    /// Look up `token`, checking expiry against the supplied clock.
    pub fn validate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, TokenValidationError> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        let session = sessions.get(token).ok_or(TokenValidationError::Unknown)?;
        if now >= session.expires_at {
            return Err(TokenValidationError::Expired);
        }
        Ok(session.clone())
    }

    /// Number of live (non-expired) sessions.
    pub fn live_count(&self, now: DateTime<Utc>) -> usize {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .values()
            .filter(|s| s.expires_at > now)
            .count()
    }
}
