use axum::extract::FromRequestParts;

use crate::{
    error::AppError,
    models::Role,
    session::{IDENTITY_KEY, Session},
};

/// The caller's session handle plus the identity stored in it, if any.
///
/// Needs the session layer from [`crate::session::session_layer`] on the router.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    handle: tower_sessions::Session,
    identity: Option<Session>,
}

impl CurrentSession {
    pub fn get(&self) -> Option<&Session> {
        self.identity.as_ref()
    }

    /// Store `identity` under a fresh session id, dropping whatever the browser held before.
    pub async fn sign_in(&mut self, identity: Session) -> Result<(), AppError> {
        self.handle.cycle_id().await?;
        self.handle.insert(IDENTITY_KEY, &identity).await?;
        self.identity = Some(identity);
        Ok(())
    }

    /// Delete the session from the store. A no-op for anonymous callers.
    pub async fn sign_out(&mut self) -> Result<(), AppError> {
        self.handle.flush().await?;
        self.identity = None;
        Ok(())
    }
}

/// `true` when an active session exists and carries exactly `role`.
pub fn authorize(session: Option<&Session>, role: Role) -> bool {
    session.is_some_and(|s| s.role == role)
}

pub fn ensure_role(session: Option<&Session>, role: Role) -> Result<&Session, AppError> {
    match session {
        Some(s) if s.role == role => Ok(s),
        _ => Err(AppError::Forbidden),
    }
}

pub fn ensure_admin(session: Option<&Session>) -> Result<&Session, AppError> {
    ensure_role(session, Role::Admin)
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let handle = tower_sessions::Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(anyhow::anyhow!(msg)))?;

        let identity = handle.get::<Session>(IDENTITY_KEY).await?;

        Ok(CurrentSession { handle, identity })
    }
}
