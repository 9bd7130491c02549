pub mod delete_scan;
pub mod get_scan_stats;
pub mod get_scans;
