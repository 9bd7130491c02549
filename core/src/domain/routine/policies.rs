use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::{entities::app_errors::CoreError, policies::BeautyScanPolicy},
    routine::ports::RoutinePolicy,
};

impl RoutinePolicy for BeautyScanPolicy {
    async fn can_manage_routines(&self, context: &AuthorizationContext) -> Result<bool, CoreError> {
        Ok(self.is_admin(context))
    }
}
