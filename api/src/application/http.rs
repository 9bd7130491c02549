pub mod analysis;
pub mod diagnostic;
pub mod health;
pub mod ingredient;
pub mod product;
pub mod routine;
pub mod scan;
pub mod server;
