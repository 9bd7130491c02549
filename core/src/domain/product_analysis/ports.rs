use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::entities::app_errors::CoreError,
    product_analysis::{
        entities::{ExternalProduct, ProductAnalysis, ScanHistoryEntry, ScanStats},
        value_objects::{AnalyzeIngredientsInput, ScanHistoryFilter},
    },
};

/// Lookup of a product by barcode in an external product database.
#[cfg_attr(test, mockall::automock)]
pub trait ProductLookup: Send + Sync {
    /// `Ok(None)` when the product is unknown or the database cannot be reached.
    fn find_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<ExternalProduct>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryRepository: Send + Sync {
    /// Every scan of the user, newest first.
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ScanHistoryEntry>, CoreError>> + Send;

    fn get_by_id(
        &self,
        scan_id: Uuid,
    ) -> impl Future<Output = Result<Option<ScanHistoryEntry>, CoreError>> + Send;

    fn record_scan(
        &self,
        entry: ScanHistoryEntry,
    ) -> impl Future<Output = Result<ScanHistoryEntry, CoreError>> + Send;

    fn delete_scan(&self, scan_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductAnalysisService: Send + Sync {
    fn analyze_ingredients(
        &self,
        context: AuthorizationContext,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<ProductAnalysis, CoreError>> + Send;

    fn analyze_barcode(
        &self,
        context: AuthorizationContext,
        barcode: String,
    ) -> impl Future<Output = Result<Option<ProductAnalysis>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryService: Send + Sync {
    fn list_scan_history(
        &self,
        context: AuthorizationContext,
        filter: ScanHistoryFilter,
    ) -> impl Future<Output = Result<Vec<ScanHistoryEntry>, CoreError>> + Send;

    fn scan_stats(
        &self,
        context: AuthorizationContext,
    ) -> impl Future<Output = Result<ScanStats, CoreError>> + Send;

    fn delete_scan(
        &self,
        context: AuthorizationContext,
        scan_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ScanHistoryPolicy: Send + Sync {
    fn can_delete_scan(
        &self,
        context: &AuthorizationContext,
        entry: &ScanHistoryEntry,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
