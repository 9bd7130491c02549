use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::{entities::app_errors::CoreError, policies::BeautyScanPolicy},
    diagnostic::{entities::Diagnostic, ports::DiagnosticPolicy},
};

impl DiagnosticPolicy for BeautyScanPolicy {
    async fn can_view_all_diagnostics(
        &self,
        context: &AuthorizationContext,
    ) -> Result<bool, CoreError> {
        Ok(self.is_admin(context))
    }

    async fn can_delete_diagnostic(
        &self,
        context: &AuthorizationContext,
        diagnostic: &Diagnostic,
    ) -> Result<bool, CoreError> {
        Ok(self.is_admin(context) || self.is_owner(context, diagnostic.user_id))
    }
}
