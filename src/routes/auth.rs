use axum::{
    Router,
    extract::State,
    response::{Html, Redirect},
    routing::get,
};

use crate::{
    dto::auth::LoginForm,
    error::AppResult,
    middleware::{auth::CurrentSession, form::HtmlForm},
    services::auth_service,
    state::AppState,
    views,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

pub async fn login_form() -> Html<String> {
    Html(views::login_page())
}

pub async fn login(
    State(state): State<AppState>,
    mut current: CurrentSession,
    HtmlForm(payload): HtmlForm<LoginForm>,
) -> AppResult<Redirect> {
    let identity = auth_service::login(&state, payload).await?;
    current.sign_in(identity).await?;
    Ok(Redirect::to("/"))
}

pub async fn logout(
    State(state): State<AppState>,
    mut current: CurrentSession,
) -> AppResult<Redirect> {
    let identity = current.get().cloned();
    current.sign_out().await?;
    auth_service::logout(&state, identity.as_ref()).await;
    Ok(Redirect::to("/"))
}
