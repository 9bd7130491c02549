pub mod create_routine;
pub mod delete_routine;
pub mod get_routine;
pub mod get_routines;
pub mod update_routine;
