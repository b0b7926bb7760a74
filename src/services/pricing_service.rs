use crate::{
    catalog::Catalog,
    dto::bill::{BillForm, COUPON_FIELD},
    error::{AppError, AppResult},
    models::{Bill, BillLine},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item: String,
    pub quantity: u32,
}

impl Selection {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

/// Read one quantity field per menu item, in menu order.
///
/// Blank, non-numeric and zero quantities are dropped rather than reported.
pub fn selections_from_form(catalog: &Catalog, form: &BillForm) -> Vec<Selection> {
    catalog
        .items()
        .iter()
        .filter_map(|menu_item| {
            let raw = form.get(&menu_item.name)?;
            let quantity = parse_quantity(raw)?;
            Some(Selection::new(menu_item.name.clone(), quantity))
        })
        .collect()
}

pub fn coupon_from_form(form: &BillForm) -> Option<&str> {
    form.get(COUPON_FIELD)
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
}

fn parse_quantity(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|qty| *qty > 0)
}

/// Price a set of selections.
///
/// Tax is charged on the subtotal and a recognised coupon discounts the taxed total.
/// Unknown coupon codes leave the discount at zero.
pub fn compute_bill(
    catalog: &Catalog,
    selections: &[Selection],
    coupon_code: Option<&str>,
) -> AppResult<Bill> {
    if selections.is_empty() {
        return Err(AppError::NoItemsSelected);
    }

    let mut lines: Vec<BillLine> = Vec::with_capacity(selections.len());
    for selection in selections {
        let menu_item = catalog
            .find_item(&selection.item)
            .ok_or_else(|| AppError::UnknownItem(selection.item.clone()))?;
        if selection.quantity == 0 {
            return Err(AppError::InvalidQuantity(selection.item.clone()));
        }

        match lines.iter_mut().find(|line| line.item == menu_item.name) {
            Some(line) => line.quantity += selection.quantity,
            None => lines.push(BillLine {
                item: menu_item.name.clone(),
                quantity: selection.quantity,
                unit_price: menu_item.unit_price,
                line_cost: 0.0,
            }),
        }
    }

    for line in &mut lines {
        line.line_cost = line.unit_price * f64::from(line.quantity);
    }

    let subtotal: f64 = lines.iter().map(|line| line.line_cost).sum();
    let tax = subtotal * catalog.tax_rate();
    let pre_discount_total = subtotal + tax;

    let coupon = coupon_code.and_then(|code| catalog.find_coupon(code)).cloned();
    let discount = coupon
        .as_ref()
        .map(|coupon| pre_discount_total * coupon.rate)
        .unwrap_or(0.0);
    let final_total = pre_discount_total - discount;

    Ok(Bill {
        lines,
        subtotal,
        tax,
        pre_discount_total,
        discount,
        final_total,
        coupon,
    })
}
