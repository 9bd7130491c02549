use chrono::Utc;

use crate::domain::product_analysis::entities::ScanHistoryEntry;
use crate::entity::scan_history::Model as ScanHistoryModel;

impl From<ScanHistoryModel> for ScanHistoryEntry {
    fn from(model: ScanHistoryModel) -> Self {
        ScanHistoryEntry {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            product_name: model.product_name,
            product_brand: model.product_brand,
            barcode: model.barcode,
            scanned_at: model.scanned_at.with_timezone(&Utc),
        }
    }
}

impl From<&ScanHistoryModel> for ScanHistoryEntry {
    fn from(model: &ScanHistoryModel) -> Self {
        ScanHistoryEntry::from(model.clone())
    }
}
