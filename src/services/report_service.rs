use chrono::{Local, NaiveDate};

use crate::{
    audit,
    error::{AppError, AppResult},
    models::{ItemSales, SalesReport},
    session::Session,
    state::AppState,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve the requested report date; blank input means `today`.
pub fn resolve_report_date(input: Option<&str>, today: NaiveDate) -> AppResult<NaiveDate> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(today),
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| AppError::InvalidDate(raw.to_string())),
    }
}

/// Build the report for the date typed into the report form, defaulting to the server's today.
pub async fn report_for_input(
    state: &AppState,
    viewer: &Session,
    input: Option<&str>,
) -> AppResult<SalesReport> {
    let date = resolve_report_date(input, Local::now().date_naive())?;
    let report = build_report(state, date).await?;

    audit::record(
        &state.pool,
        Some(&viewer.username),
        "report_viewed",
        Some("order_lines"),
        Some(serde_json::json!({ "date": report.date })),
    )
    .await;

    Ok(report)
}

/// Aggregate every stored line whose timestamp falls on `date`.
///
/// Revenue sums the order-level `final_total` once per stored line, and orders are counted
/// as distinct timestamps.
pub async fn build_report(state: &AppState, date: NaiveDate) -> AppResult<SalesReport> {
    let day = date.format(DATE_FORMAT).to_string();
    let start = format!("{day} 00:00:00");
    let end = format!("{day} 23:59:59");

    let (total_revenue, orders_count): (f64, i64) = sqlx::query_as(
        r#"
        SELECT CAST(COALESCE(SUM(final_total), 0) AS REAL), COUNT(DISTINCT ordered_at)
        FROM order_lines
        WHERE ordered_at BETWEEN ? AND ?
        "#,
    )
    .bind(&start)
    .bind(&end)
    .fetch_one(&state.pool)
    .await?;

    let per_item: Vec<ItemSales> = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT item, SUM(quantity) AS total_qty
        FROM order_lines
        WHERE ordered_at BETWEEN ? AND ?
        GROUP BY item
        ORDER BY total_qty DESC, MIN(id) ASC
        "#,
    )
    .bind(&start)
    .bind(&end)
    .fetch_all(&state.pool)
    .await?
    .into_iter()
    .map(|(item, total_quantity)| ItemSales {
        item,
        total_quantity,
    })
    .collect();

    let top_seller = per_item.first().cloned();

    tracing::debug!(
        date = %day,
        orders_count,
        total_revenue,
        items = per_item.len(),
        "report built"
    );

    Ok(SalesReport {
        date: day,
        orders_count,
        total_revenue,
        per_item,
        top_seller,
    })
}
