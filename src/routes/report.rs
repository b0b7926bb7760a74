use axum::{Router, extract::State, response::Html, routing::get};

use crate::{
    dto::report::ReportQuery,
    error::AppResult,
    middleware::{
        auth::{CurrentSession, ensure_admin},
        form::HtmlForm,
    },
    services::report_service,
    state::AppState,
    views,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/report", get(report_form).post(report))
}

pub async fn report_form(current: CurrentSession) -> AppResult<Html<String>> {
    let session = ensure_admin(current.get())?;
    Ok(Html(views::report_page(session, None)))
}

pub async fn report(
    State(state): State<AppState>,
    current: CurrentSession,
    HtmlForm(query): HtmlForm<ReportQuery>,
) -> AppResult<Html<String>> {
    let session = ensure_admin(current.get())?;
    let report = report_service::report_for_input(&state, session, query.date.as_deref()).await?;
    Ok(Html(views::report_page(session, Some(&report))))
}
