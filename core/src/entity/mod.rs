pub mod diagnostics;
pub mod global_ingredients;
pub mod global_products;
pub mod routines;
pub mod scan_history;
