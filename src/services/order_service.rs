use chrono::{Local, NaiveDateTime};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};
use sea_orm::ActiveValue::NotSet;

use crate::{
    audit,
    dto::bill::BillForm,
    entity::order_lines::{ActiveModel as OrderLineActive, Model as OrderLineModel},
    error::{AppError, AppResult},
    models::{Bill, OrderLine},
    services::pricing_service::{compute_bill, coupon_from_form, selections_from_form},
    session::Session,
    state::AppState,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Price the submitted form and persist the resulting order, stamped with the local time.
pub async fn checkout(
    state: &AppState,
    session: Option<&Session>,
    form: &BillForm,
) -> AppResult<Bill> {
    let selections = selections_from_form(&state.catalog, form);
    let bill = compute_bill(&state.catalog, &selections, coupon_from_form(form))?;

    let lines = place_order(state, &bill, Local::now().naive_local()).await?;

    audit::record(
        &state.pool,
        session.map(|s| s.username.as_str()),
        "order_placed",
        Some("order_lines"),
        Some(serde_json::json!({
            "line_ids": lines.iter().map(|line| line.id).collect::<Vec<_>>(),
            "final_total": bill.final_total,
        })),
    )
    .await;

    Ok(bill)
}

/// Persist one row per bill line, all carrying the order-level totals and one timestamp.
///
/// The rows are written in a single transaction: either the whole order is stored or none of it.
pub async fn place_order(
    state: &AppState,
    bill: &Bill,
    placed_at: NaiveDateTime,
) -> AppResult<Vec<OrderLine>> {
    if bill.lines.is_empty() {
        return Err(AppError::NoItemsSelected);
    }

    let ordered_at = placed_at.format(TIMESTAMP_FORMAT).to_string();
    let txn = state.orm.begin().await?;

    let mut stored: Vec<OrderLine> = Vec::with_capacity(bill.lines.len());
    for line in &bill.lines {
        let quantity = i32::try_from(line.quantity)
            .map_err(|_| AppError::InvalidQuantity(line.item.clone()))?;
        let model = OrderLineActive {
            id: NotSet,
            item: Set(line.item.clone()),
            quantity: Set(quantity),
            line_cost: Set(line.line_cost),
            subtotal: Set(bill.subtotal),
            tax: Set(bill.tax),
            discount: Set(bill.discount),
            final_total: Set(bill.final_total),
            ordered_at: Set(ordered_at.clone()),
        }
        .insert(&txn)
        .await?;

        stored.push(order_line_from_entity(model));
    }

    txn.commit().await?;

    tracing::info!(
        lines = stored.len(),
        final_total = bill.final_total,
        ordered_at = %ordered_at,
        "order placed"
    );

    Ok(stored)
}

fn order_line_from_entity(model: OrderLineModel) -> OrderLine {
    OrderLine {
        id: model.id,
        item: model.item,
        quantity: model.quantity,
        line_cost: model.line_cost,
        subtotal: model.subtotal,
        tax: model.tax,
        discount: model.discount,
        final_total: model.final_total,
        ordered_at: model.ordered_at,
    }
}
