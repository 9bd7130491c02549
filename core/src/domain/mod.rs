pub mod authentication;
pub mod common;
pub mod diagnostic;
pub mod health;
pub mod ingredient;
pub mod product;
pub mod product_analysis;
pub mod routine;
