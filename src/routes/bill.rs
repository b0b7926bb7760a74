use axum::{Router, extract::State, response::Html, routing::post};

use crate::{
    dto::bill::BillForm,
    error::AppResult,
    middleware::{auth::CurrentSession, form::HtmlForm},
    services::order_service,
    state::AppState,
    views,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/bill", post(bill))
}

pub async fn bill(
    State(state): State<AppState>,
    current: CurrentSession,
    HtmlForm(form): HtmlForm<BillForm>,
) -> AppResult<Html<String>> {
    let bill = order_service::checkout(&state, current.get(), &form).await?;
    Ok(Html(views::bill_page(&bill, current.get())))
}
