use crate::models::{Coupon, MenuItem};

pub const GST_RATE: f64 = 0.05;

const DEFAULT_MENU: [(&str, f64); 10] = [
    ("Idly", 20.0),
    ("Dosa", 40.0),
    ("Chapathi", 30.0),
    ("Puri", 35.0),
    ("Roti", 50.0),
    ("Biryani", 200.0),
    ("Fried Rice", 150.0),
    ("Paneer Curry", 120.0),
    ("Gulab Jamun", 60.0),
    ("Ice Cream", 80.0),
];

const DEFAULT_COUPONS: [(&str, f64); 2] = [("SAVE10", 0.10), ("SAVE20", 0.20)];

/// Menu, coupon table and tax rate. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
    coupons: Vec<Coupon>,
    tax_rate: f64,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>, coupons: Vec<Coupon>, tax_rate: f64) -> Self {
        Self {
            items,
            coupons,
            tax_rate,
        }
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Case-insensitive lookup of a coupon code; surrounding whitespace is ignored.
    pub fn find_coupon(&self, code: &str) -> Option<&Coupon> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return None;
        }
        self.coupons.iter().find(|coupon| coupon.code == code)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let items = DEFAULT_MENU
            .iter()
            .map(|(name, price)| MenuItem {
                name: name.to_string(),
                unit_price: *price,
            })
            .collect();
        let coupons = DEFAULT_COUPONS
            .iter()
            .map(|(code, rate)| Coupon {
                code: code.to_string(),
                rate: *rate,
            })
            .collect();
        Self::new(items, coupons, GST_RATE)
    }
}
