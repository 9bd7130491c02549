use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::{entities::app_errors::CoreError, policies::BeautyScanPolicy},
    product::ports::ProductPolicy,
};

impl ProductPolicy for BeautyScanPolicy {
    async fn can_manage_products(&self, context: &AuthorizationContext) -> Result<bool, CoreError> {
        Ok(self.is_admin(context))
    }
}
