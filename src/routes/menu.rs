use axum::{extract::State, response::Html};

use crate::{middleware::auth::CurrentSession, state::AppState, views};

pub async fn home(State(state): State<AppState>, current: CurrentSession) -> Html<String> {
    Html(views::menu_page(&state.catalog, current.get()))
}
