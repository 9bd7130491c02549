pub mod authentication;
pub mod db;
pub mod diagnostic;
pub mod health;
pub mod ingredient;
pub mod llm;
pub mod open_food_facts;
pub mod product;
pub mod product_analysis;
pub mod routine;
