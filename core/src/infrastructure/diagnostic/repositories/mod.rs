pub mod diagnostic_repository;
