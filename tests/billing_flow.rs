mod common;

use common::{approx, at, date, setup_state};
use restaurant_pos::{
    catalog::{Catalog, GST_RATE},
    dto::bill::BillForm,
    entity::order_lines::{Column as LineCol, Entity as OrderLines},
    error::AppError,
    services::{
        order_service,
        pricing_service::{Selection, compute_bill},
        report_service::build_report,
    },
};
use sea_orm::{EntityTrait, QueryOrder};

fn idly_and_dosa() -> Vec<Selection> {
    vec![Selection::new("Idly", 2), Selection::new("Dosa", 1)]
}

#[test]
fn bill_without_coupon_adds_gst() {
    let catalog = Catalog::default();
    let bill = compute_bill(&catalog, &idly_and_dosa(), None).expect("bill");

    assert!(approx(bill.subtotal, 80.0));
    assert!(approx(bill.tax, 4.0));
    assert!(approx(bill.discount, 0.0));
    assert!(approx(bill.final_total, 84.0));
    assert!(bill.coupon.is_none());
    assert_eq!(bill.lines.len(), 2);
    assert!(approx(bill.lines[0].line_cost, 40.0));
}

#[test]
fn coupon_discounts_the_taxed_total() {
    let catalog = Catalog::default();
    let bill = compute_bill(&catalog, &idly_and_dosa(), Some(" save10 ")).expect("bill");

    assert!(approx(bill.pre_discount_total, 84.0));
    assert!(approx(bill.discount, 8.4));
    assert!(approx(bill.final_total, 75.6));
    assert_eq!(bill.coupon.map(|c| c.code), Some("SAVE10".to_string()));
}

#[test]
fn totals_follow_the_gst_and_coupon_formulas() {
    let catalog = Catalog::default();
    let orders = [
        vec![Selection::new("Biryani", 1)],
        vec![Selection::new("Puri", 3), Selection::new("Ice Cream", 2)],
        vec![
            Selection::new("Roti", 7),
            Selection::new("Paneer Curry", 1),
            Selection::new("Gulab Jamun", 4),
        ],
    ];

    for selections in &orders {
        let plain = compute_bill(&catalog, selections, None).expect("bill");
        assert!(approx(plain.final_total, plain.subtotal * (1.0 + GST_RATE)));

        let saved = compute_bill(&catalog, selections, Some("SAVE20")).expect("bill");
        assert!(approx(
            saved.final_total,
            saved.subtotal * (1.0 + GST_RATE) * (1.0 - 0.20)
        ));
        assert!(approx(
            saved.final_total,
            saved.subtotal + saved.tax - saved.discount
        ));
    }
}

#[test]
fn unknown_coupon_is_the_same_as_no_coupon() {
    let catalog = Catalog::default();
    let plain = compute_bill(&catalog, &idly_and_dosa(), None).expect("bill");
    let unknown = compute_bill(&catalog, &idly_and_dosa(), Some("FREEFOOD")).expect("bill");
    assert_eq!(plain, unknown);
}

#[test]
fn empty_and_unknown_selections_are_rejected() {
    let catalog = Catalog::default();
    assert!(matches!(
        compute_bill(&catalog, &[], None),
        Err(AppError::NoItemsSelected)
    ));
    assert!(matches!(
        compute_bill(&catalog, &[Selection::new("Pizza", 1)], None),
        Err(AppError::UnknownItem(item)) if item == "Pizza"
    ));
}

#[tokio::test]
async fn form_with_only_zero_or_garbage_quantities_places_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let form: BillForm = [("Idly", "0"), ("Dosa", "two"), ("Puri", ""), ("coupon", "SAVE10")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let err = order_service::checkout(&state, None, &form).await.unwrap_err();
    assert!(matches!(err, AppError::NoItemsSelected));

    let stored = OrderLines::find().all(&state.orm).await?;
    assert!(stored.is_empty());
    Ok(())
}

#[tokio::test]
async fn placed_order_stores_one_row_per_line_with_shared_totals() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let bill = compute_bill(&state.catalog, &idly_and_dosa(), Some("SAVE10"))?;

    let placed = order_service::place_order(&state, &bill, at(date(2024, 5, 17), 12, 30, 5)).await?;
    assert_eq!(placed.len(), 2);

    let stored = OrderLines::find()
        .order_by_asc(LineCol::Id)
        .all(&state.orm)
        .await?;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].item, "Idly");
    assert_eq!(stored[0].quantity, 2);
    assert!(approx(stored[0].line_cost, 40.0));
    assert_eq!(stored[1].item, "Dosa");

    for row in &stored {
        assert_eq!(row.ordered_at, "2024-05-17 12:30:05");
        assert!(approx(row.subtotal, 80.0));
        assert!(approx(row.tax, 4.0));
        assert!(approx(row.discount, 8.4));
        assert!(approx(row.final_total, row.subtotal + row.tax - row.discount));
    }
    Ok(())
}

#[tokio::test]
async fn report_for_a_quiet_day_is_empty() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let report = build_report(&state, date(2024, 1, 1)).await?;

    assert_eq!(report.date, "2024-01-01");
    assert_eq!(report.orders_count, 0);
    assert!(approx(report.total_revenue, 0.0));
    assert!(report.per_item.is_empty());
    assert!(report.top_seller.is_none());
    Ok(())
}

#[tokio::test]
async fn report_covers_exactly_the_requested_day() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let day = date(2024, 5, 17);
    let next_day = date(2024, 5, 18);

    // 84.0 total, two lines
    let first = compute_bill(&state.catalog, &idly_and_dosa(), None)?;
    order_service::place_order(&state, &first, at(day, 0, 0, 0)).await?;

    // 3 * 20 = 60 -> 63.0 total, one line
    let second = compute_bill(&state.catalog, &[Selection::new("Idly", 3)], None)?;
    order_service::place_order(&state, &second, at(day, 23, 59, 59)).await?;

    let other = compute_bill(&state.catalog, &[Selection::new("Biryani", 5)], None)?;
    order_service::place_order(&state, &other, at(next_day, 0, 0, 0)).await?;

    let report = build_report(&state, day).await?;
    assert_eq!(report.orders_count, 2);
    // final_total is summed once per stored line: 84 * 2 + 63
    assert!(approx(report.total_revenue, 84.0 * 2.0 + 63.0));

    let per_item: Vec<(&str, i64)> = report
        .per_item
        .iter()
        .map(|entry| (entry.item.as_str(), entry.total_quantity))
        .collect();
    assert_eq!(per_item, vec![("Idly", 5), ("Dosa", 1)]);
    assert_eq!(
        report.top_seller.map(|top| top.item),
        Some("Idly".to_string())
    );

    let next = build_report(&state, next_day).await?;
    assert_eq!(next.orders_count, 1);
    assert!(approx(next.total_revenue, 1050.0));
    assert!(next.per_item.iter().all(|entry| entry.item == "Biryani"));

    let before = build_report(&state, date(2024, 5, 16)).await?;
    assert_eq!(before.orders_count, 0);
    Ok(())
}

#[tokio::test]
async fn orders_in_the_same_second_count_once() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let when = at(date(2024, 6, 1), 9, 15, 0);

    let a = compute_bill(&state.catalog, &[Selection::new("Dosa", 1)], None)?;
    let b = compute_bill(&state.catalog, &[Selection::new("Puri", 1)], None)?;
    order_service::place_order(&state, &a, when).await?;
    order_service::place_order(&state, &b, when).await?;

    let report = build_report(&state, date(2024, 6, 1)).await?;
    assert_eq!(report.orders_count, 1);
    assert!(approx(report.total_revenue, 42.0 + 36.75));
    // equal quantities keep first-seen order
    assert_eq!(report.per_item[0].item, "Dosa");
    assert_eq!(report.per_item[1].item, "Puri");
    Ok(())
}
