pub mod auth;
pub mod bill;
pub mod menu;
pub mod report;
