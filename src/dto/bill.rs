use std::collections::HashMap;

/// Raw `/bill` form: one optional quantity field per menu item name plus `coupon`.
pub type BillForm = HashMap<String, String>;

pub const COUPON_FIELD: &str = "coupon";
