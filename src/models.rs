use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub name: String,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coupon {
    pub code: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Cashier => "cashier",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// One persisted line of a customer order. Order-level totals are repeated on every line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub id: i32,
    pub item: String,
    pub quantity: i32,
    pub line_cost: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub final_total: f64,
    pub ordered_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BillLine {
    pub item: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub pre_discount_total: f64,
    pub discount: f64,
    pub final_total: f64,
    /// Present only when the submitted code matched a known coupon.
    pub coupon: Option<Coupon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemSales {
    pub item: String,
    pub total_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalesReport {
    pub date: String,
    pub orders_count: i64,
    pub total_revenue: f64,
    pub per_item: Vec<ItemSales>,
    pub top_seller: Option<ItemSales>,
}
