//! Cookie sessions on top of `tower-sessions`.
//!
//! The store is whatever [`SessionStore`] the caller hands to [`session_layer`]; the server
//! uses the SQLite-backed [`SqliteStore`] on the order database and sweeps expired rows with
//! [`spawn_expired_sweep`]. Handlers only ever see the typed [`Session`] payload stored under
//! [`IDENTITY_KEY`].

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tower_sessions::{
    Expiry, SessionManagerLayer, SessionStore,
    cookie::{SameSite, time::Duration},
    session_store::ExpiredDeletion,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{db::DbPool, models::Role};

pub const SESSION_COOKIE: &str = "pos_session";

/// Key of the identity record inside the session data.
pub const IDENTITY_KEY: &str = "identity";

/// Identity held for an authenticated browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

/// Cookie and expiry settings shared by every store.
pub fn session_layer<S>(store: S, ttl_minutes: i64) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(false)
        .with_path("/")
        .with_expiry(Expiry::OnInactivity(Duration::minutes(ttl_minutes)))
}

/// Session table living next to the order lines.
pub async fn create_session_store(pool: &DbPool) -> anyhow::Result<SqliteStore> {
    let store = SqliteStore::new(pool.clone());
    store.migrate().await?;
    Ok(store)
}

/// Delete expired sessions every `period` until the task is aborted.
pub fn spawn_expired_sweep<S>(store: S, period: std::time::Duration) -> JoinHandle<()>
where
    S: ExpiredDeletion + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if let Err(err) = store.delete_expired().await {
                tracing::warn!(error = %err, "expired session sweep failed");
            }
        }
    })
}
