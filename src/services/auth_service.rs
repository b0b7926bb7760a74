use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::{
    audit,
    dto::auth::LoginForm,
    error::{AppError, AppResult},
    session::Session,
    state::AppState,
    users::UserDirectory,
};

/// Check a username/password pair against the directory.
///
/// An unknown user and a wrong password produce the same [`AppError::InvalidLogin`].
pub fn authenticate(
    users: &dyn UserDirectory,
    username: &str,
    password: &str,
) -> AppResult<Session> {
    let user = match users.find_user(username) {
        Some(u) => u,
        None => return Err(AppError::InvalidLogin),
    };

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::InvalidLogin);
    }

    Ok(Session {
        username: user.username,
        role: user.role,
    })
}

/// Authenticate off the async runtime; argon2 verification is CPU-bound.
pub async fn login(state: &AppState, payload: LoginForm) -> AppResult<Session> {
    let LoginForm { username, password } = payload;
    let users = state.users.clone();
    let name = username.clone();
    let verified =
        tokio::task::spawn_blocking(move || authenticate(users.as_ref(), &name, &password))
            .await
            .map_err(|err| AppError::Internal(anyhow::anyhow!("login task failed: {err}")))?;

    let session = match verified {
        Ok(session) => session,
        Err(err) => {
            tracing::info!(username = %username, "login rejected");
            return Err(err);
        }
    };
    tracing::info!(username = %username, role = %session.role, "logged in");

    audit::record(
        &state.pool,
        Some(&username),
        "login",
        Some("sessions"),
        Some(serde_json::json!({ "role": session.role })),
    )
    .await;

    Ok(session)
}

/// Record the end of a session. Anonymous callers leave no trace.
pub async fn logout(state: &AppState, identity: Option<&Session>) {
    if let Some(identity) = identity {
        tracing::info!(username = %identity.username, "logged out");
        audit::record(
            &state.pool,
            Some(&identity.username),
            "logout",
            Some("sessions"),
            None,
        )
        .await;
    }
}
