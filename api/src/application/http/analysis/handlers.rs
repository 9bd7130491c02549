pub mod analyze_barcode;
pub mod analyze_text;
