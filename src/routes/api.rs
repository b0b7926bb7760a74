use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::{menu::MenuData, report::ReportQuery},
    error::ApiResult,
    middleware::auth::{CurrentSession, ensure_admin},
    models::SalesReport,
    response::{ApiResponse, Meta},
    services::report_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/menu", get(menu))
        .route("/report", get(report))
}

#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Menu with unit prices", body = ApiResponse<MenuData>)
    ),
    tag = "Menu"
)]
pub async fn menu(State(state): State<AppState>) -> Json<ApiResponse<MenuData>> {
    let data = MenuData {
        items: state.catalog.items().to_vec(),
        tax_rate: state.catalog.tax_rate(),
    };
    let total = data.items.len() as i64;
    Json(ApiResponse::success(
        "Menu",
        data,
        Some(Meta {
            date: None,
            total: Some(total),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/report",
    params(ReportQuery),
    responses(
        (status = 200, description = "Sales report for one day (admin only)", body = ApiResponse<SalesReport>),
        (status = 400, description = "Invalid date"),
        (status = 403, description = "Forbidden"),
    ),
    security(("session_cookie" = [])),
    tag = "Report"
)]
pub async fn report(
    State(state): State<AppState>,
    current: CurrentSession,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Json<ApiResponse<SalesReport>>> {
    let session = ensure_admin(current.get())?;
    let report = report_service::report_for_input(&state, session, query.date.as_deref()).await?;
    let meta = Meta::new(report.date.clone(), report.orders_count);
    Ok(Json(ApiResponse::success("Sales report", report, Some(meta))))
}
