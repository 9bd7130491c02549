use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product_analysis::{entities::ScanHistoryEntry, ports::ScanHistoryRepository},
    },
    entity::scan_history::{
        ActiveModel as ScanHistoryActiveModel, Column as ScanHistoryColumn,
        Entity as ScanHistoryEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresScanHistoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresScanHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ScanHistoryRepository for PostgresScanHistoryRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ScanHistoryEntry>, CoreError> {
        let entries = ScanHistoryEntity::find()
            .filter(ScanHistoryColumn::UserId.eq(user_id))
            .order_by_desc(ScanHistoryColumn::ScannedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list scan history: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ScanHistoryEntry::from)
            .collect::<Vec<ScanHistoryEntry>>();

        Ok(entries)
    }

    async fn get_by_id(&self, scan_id: Uuid) -> Result<Option<ScanHistoryEntry>, CoreError> {
        let entry = ScanHistoryEntity::find_by_id(scan_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get scan: {}", e);
                CoreError::InternalServerError
            })?
            .map(ScanHistoryEntry::from);

        Ok(entry)
    }

    async fn record_scan(&self, entry: ScanHistoryEntry) -> Result<ScanHistoryEntry, CoreError> {
        let recorded = ScanHistoryEntity::insert(ScanHistoryActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            product_id: Set(entry.product_id),
            product_name: Set(entry.product_name),
            product_brand: Set(entry.product_brand),
            barcode: Set(entry.barcode),
            scanned_at: Set(entry.scanned_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(ScanHistoryEntry::from)
        .map_err(|e| {
            error!("Failed to record scan: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(recorded)
    }

    async fn delete_scan(&self, scan_id: Uuid) -> Result<(), CoreError> {
        ScanHistoryEntity::delete_by_id(scan_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete scan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
