pub mod delete_diagnostic;
pub mod get_all_diagnostics;
pub mod get_diagnostics;
pub mod get_latest_diagnostic;
pub mod submit_diagnostic;
