use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::{AuthorizationContext, Role},
    common::entities::app_errors::CoreError,
};

/// Repository trait for the role assignments of users
#[cfg_attr(test, mockall::automock)]
pub trait UserRoleRepository: Send + Sync {
    fn get_roles_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Role>, CoreError>> + Send;
}

/// Service trait turning a bearer token into an [`AuthorizationContext`]
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authorize_request(
        &self,
        token: String,
    ) -> impl Future<Output = Result<AuthorizationContext, CoreError>> + Send;

    fn resolve_authorization(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<AuthorizationContext, CoreError>> + Send;
}
