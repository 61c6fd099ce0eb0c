//! Service wiring: stores + session store.

use std::sync::Arc;

use chrono::Duration;

use stockdesk_auth::SessionStore;
use stockdesk_store::{
    ItemStore, MemoryItemStore, MemoryMessageStore, MessageStore, PgItemStore, PgMessageStore,
};

/// Sessions live this long after issue.
const SESSION_TTL_HOURS: i64 = 8;

/// Everything handlers need, injected as one `Extension(Arc<AppServices>)`.
pub struct AppServices {
    pub items: Arc<dyn ItemStore>,
    pub messages: Arc<dyn MessageStore>,
    pub sessions: Arc<SessionStore>,
}

/// Build services from the environment.
///
/// `USE_PERSISTENT_STORES=true` selects Postgres-backed stores; anything
/// else gets in-memory stores (dev/test).
pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .map(|v| v == "true")
        .unwrap_or(false);

    if use_persistent {
        build_persistent_services().await
    } else {
        build_in_memory_services()
    }
}

fn session_store() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(Duration::hours(SESSION_TTL_HOURS)))
}

fn build_in_memory_services() -> AppServices {
    AppServices {
        items: Arc::new(MemoryItemStore::new()),
        messages: Arc::new(MemoryMessageStore::new()),
        sessions: session_store(),
    }
}

async fn build_persistent_services() -> AppServices {
    let url = stockdesk_store::config::database_url_from_env()
        .expect("database configuration must be set when USE_PERSISTENT_STORES=true");

    let pool = stockdesk_store::connect_pool(&url)
        .await
        .expect("failed to connect to Postgres");

    AppServices {
        items: Arc::new(PgItemStore::new(pool.clone())),
        messages: Arc::new(PgMessageStore::new(pool)),
        sessions: session_store(),
    }
}
