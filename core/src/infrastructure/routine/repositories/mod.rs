pub mod routine_repository;
