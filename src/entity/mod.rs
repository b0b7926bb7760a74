pub mod order_lines;

pub use order_lines::Entity as OrderLines;
