pub mod mappers;
pub mod repositories;

pub use repositories::product_repository::PostgresProductRepository;
