use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{
        ports::{AuthService, UserRoleRepository},
        value_objects::{AccessTokenClaims, AuthorizationContext},
    },
    common::{entities::app_errors::CoreError, services::Service},
    diagnostic::ports::{DiagnosticClassifier, DiagnosticRepository},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    product::ports::ProductRepository,
    product_analysis::ports::{ProductLookup, ScanHistoryRepository},
    routine::ports::RoutineRepository,
};

/// Verifies HS256 access tokens issued by the hosted auth provider.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The provider stamps `aud: authenticated` on every token.
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, CoreError> {
        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected access token: {}", e);
                CoreError::Unauthorized
            })
    }
}

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> AuthService
    for Service<IR, PR, RR, SH, DR, UR, HC, PL, DC>
where
    IR: IngredientRepository,
    PR: ProductRepository,
    RR: RoutineRepository,
    SH: ScanHistoryRepository,
    DR: DiagnosticRepository,
    UR: UserRoleRepository,
    HC: HealthCheckRepository,
    PL: ProductLookup,
    DC: DiagnosticClassifier,
{
    #[instrument(skip(self, token))]
    async fn authorize_request(&self, token: String) -> Result<AuthorizationContext, CoreError> {
        let claims = self.token_verifier.verify(&token)?;
        self.resolve_authorization(claims.sub).await
    }

    #[instrument(skip(self))]
    async fn resolve_authorization(&self, user_id: Uuid) -> Result<AuthorizationContext, CoreError> {
        let roles = self.user_role_repository.get_roles_by_user_id(user_id).await?;

        tracing::debug!(user_id = %user_id, roles = roles.len(), "Resolved authorization context");

        Ok(AuthorizationContext::new(user_id, roles))
    }
}
