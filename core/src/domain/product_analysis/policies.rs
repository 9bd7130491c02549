use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::{entities::app_errors::CoreError, policies::BeautyScanPolicy},
    product_analysis::{entities::ScanHistoryEntry, ports::ScanHistoryPolicy},
};

impl ScanHistoryPolicy for BeautyScanPolicy {
    async fn can_delete_scan(
        &self,
        context: &AuthorizationContext,
        entry: &ScanHistoryEntry,
    ) -> Result<bool, CoreError> {
        Ok(self.is_owner(context, entry.user_id))
    }
}
