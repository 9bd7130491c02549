pub mod ingredient_repository;
