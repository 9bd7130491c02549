use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::{entities::app_errors::CoreError, policies::BeautyScanPolicy},
    ingredient::ports::IngredientPolicy,
};

impl IngredientPolicy for BeautyScanPolicy {
    async fn can_manage_catalog(&self, context: &AuthorizationContext) -> Result<bool, CoreError> {
        Ok(self.is_admin(context))
    }
}
