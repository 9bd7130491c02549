pub mod scan_history_repository;
