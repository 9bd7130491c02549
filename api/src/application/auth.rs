use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use beautyscan_core::domain::authentication::{
    ports::AuthService, value_objects::AuthorizationContext,
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Token not found".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Verifies the bearer token and resolves the caller's roles once per request.
///
/// The resulting [`AuthorizationContext`] is stored in the request extensions
/// for [`RequiredContext`].
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await?;

    let context = state
        .service
        .authorize_request(token)
        .await
        .map_err(ApiError::from)?;

    debug!(user_id = %context.user_id, admin = context.is_admin(), "Request authorized");

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

/// Extractor for the [`AuthorizationContext`] set by the [`auth`] middleware.
pub struct RequiredContext(pub AuthorizationContext);

impl<S> FromRequestParts<S> for RequiredContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthorizationContext>()
            .cloned()
            .map(RequiredContext)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use uuid::Uuid;

    #[tokio::test]
    async fn bearer_token_is_extracted() {
        let (mut parts, _) = HttpRequest::builder()
            .header("authorization", "Bearer abc.def.ghi")
            .body(())
            .unwrap()
            .into_parts();

        assert_eq!(
            extract_token_from_bearer(&mut parts).await,
            Ok("abc.def.ghi".to_string())
        );
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let (mut parts, _) = HttpRequest::builder().body(()).unwrap().into_parts();

        assert!(matches!(
            extract_token_from_bearer(&mut parts).await,
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn context_is_read_from_extensions() {
        let (mut parts, _) = HttpRequest::builder().body(()).unwrap().into_parts();
        assert!(RequiredContext::from_request_parts(&mut parts, &()).await.is_err());

        let user_id = Uuid::new_v4();
        parts
            .extensions
            .insert(AuthorizationContext::new(user_id, vec![]));

        let RequiredContext(context) = RequiredContext::from_request_parts(&mut parts, &())
            .await
            .unwrap_or_else(|_| panic!("context should be present"));
        assert_eq!(context.user_id, user_id);
    }
}
