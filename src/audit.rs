use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{db::DbPool, error::AppResult};

pub async fn log_audit(
    pool: &DbPool,
    username: Option<&str>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> AppResult<()> {
    let id = Uuid::new_v4();
    let created_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    sqlx::query(
        r#"
        INSERT INTO audit_logs (id, username, action, resource, metadata, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id.to_string())
    .bind(username)
    .bind(action)
    .bind(resource)
    .bind(metadata.map(|m| m.to_string()))
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Record an audit event; failures are logged and swallowed.
pub async fn record(
    pool: &DbPool,
    username: Option<&str>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    if let Err(err) = log_audit(pool, username, action, resource, metadata).await {
        tracing::warn!(error = %err, action, "audit log failed");
    }
}
