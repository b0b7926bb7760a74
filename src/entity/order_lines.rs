use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item: String,
    pub quantity: i32,
    pub line_cost: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub final_total: f64,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub ordered_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
