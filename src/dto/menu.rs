use serde::Serialize;
use utoipa::ToSchema;

use crate::models::MenuItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuData {
    pub items: Vec<MenuItem>,
    pub tax_rate: f64,
}
