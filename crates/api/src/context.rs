use chrono::{DateTime, Utc};

/// Session context for a request.
///
/// Present on every route behind the session middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    username: String,
    issued_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(username: String, issued_at: DateTime<Utc>) -> Self {
        Self {
            username,
            issued_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
