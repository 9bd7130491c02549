use crate::domain::{
    authentication::value_objects::AuthorizationContext, common::entities::app_errors::CoreError,
};

/// Stateless policy evaluated against an already resolved [`AuthorizationContext`].
///
/// Each domain implements its own policy trait on this type.
#[derive(Debug, Clone, Default)]
pub struct BeautyScanPolicy;

impl BeautyScanPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn is_admin(&self, context: &AuthorizationContext) -> bool {
        context.is_admin()
    }

    pub fn is_owner(&self, context: &AuthorizationContext, owner_id: uuid::Uuid) -> bool {
        context.user_id == owner_id
    }
}

pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::debug!("policy denied: {}", message);
            Err(CoreError::Forbidden(message.to_string()))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_maps_denial_to_forbidden() {
        assert_eq!(ensure_policy(Ok(true), "nope"), Ok(()));
        assert_eq!(
            ensure_policy(Ok(false), "nope"),
            Err(CoreError::Forbidden("nope".to_string()))
        );
        assert_eq!(
            ensure_policy(Err(CoreError::InternalServerError), "nope"),
            Err(CoreError::InternalServerError)
        );
    }
}
