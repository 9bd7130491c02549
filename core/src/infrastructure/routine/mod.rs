pub mod mappers;
pub mod repositories;

pub use repositories::routine_repository::PostgresRoutineRepository;
