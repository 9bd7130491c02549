pub mod user_role_repository;

pub use user_role_repository::PostgresUserRoleRepository;
