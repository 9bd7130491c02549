pub mod mappers;
pub mod repositories;

pub use repositories::diagnostic_repository::PostgresDiagnosticRepository;
