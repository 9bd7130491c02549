use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use beautyscan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PaymentRequired(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::PaymentRequired(_) => "E_PAYMENT_REQUIRED",
            ApiError::TooManyRequests(_) => "E_RATE_LIMITED",
            ApiError::BadGateway(_) => "E_BAD_GATEWAY",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

// Gateway throttling messages are shown to end users as-is.
impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Validation { .. } => ApiError::BadRequest(error.to_string()),
            CoreError::Unauthorized => ApiError::Unauthorized(error.to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::RateLimited => ApiError::TooManyRequests(
                "Limite de requêtes dépassée, veuillez réessayer plus tard.".to_string(),
            ),
            CoreError::PaymentRequired => ApiError::PaymentRequired(
                "Paiement requis, veuillez ajouter des crédits à votre compte Lovable AI."
                    .to_string(),
            ),
            CoreError::ExternalServiceError(message) => ApiError::BadGateway(message),
            CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

/// JSON body extractor reporting malformed payloads in the API error format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        routing::{get, post},
    };
    use axum_test::TestServer;
    use serde_json::json;

    #[test]
    fn core_errors_map_to_their_status() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::validation("name", "too short"),
                StatusCode::BAD_REQUEST,
            ),
            (CoreError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                CoreError::Forbidden("admins only".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (CoreError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (CoreError::PaymentRequired, StatusCode::PAYMENT_REQUIRED),
            (
                CoreError::ExternalServiceError("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_code(), status);
        }
    }

    #[test]
    fn validation_message_names_the_field() {
        let error = ApiError::from(CoreError::validation("hazard_tier", "must be between 0 and 3"));
        assert_eq!(
            error,
            ApiError::BadRequest("Invalid value for `hazard_tier`: must be between 0 and 3".to_string())
        );
    }

    #[tokio::test]
    async fn error_body_carries_code_message_and_status() {
        let app = Router::new().route(
            "/",
            get(|| async { Err::<(), _>(ApiError::Forbidden("admins only".to_string())) }),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").expect_failure().await;
        response.assert_status(StatusCode::FORBIDDEN);
        response.assert_json(&json!({
            "code": "E_FORBIDDEN",
            "message": "admins only",
            "status": 403
        }));
    }

    #[derive(Debug, Deserialize, Validate)]
    struct NamePayload {
        #[validate(length(min = 2, message = "name is too short"))]
        name: String,
    }

    #[tokio::test]
    async fn validated_body_is_rejected_with_bad_request() {
        let app = Router::new().route(
            "/",
            post(|ValidateJson(payload): ValidateJson<NamePayload>| async move { payload.name }),
        );
        let server = TestServer::new(app).unwrap();

        server
            .post("/")
            .json(&json!({ "name": "Aqua" }))
            .await
            .assert_text("Aqua");

        let response = server
            .post("/")
            .json(&json!({ "name": "A" }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ApiErrorResponse>().code, "E_BAD_REQUEST");
    }

    #[tokio::test]
    async fn malformed_json_uses_the_error_envelope() {
        let app = Router::new().route(
            "/",
            post(|JsonBody(value): JsonBody<NamePayload>| async move { value.name }),
        );
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/")
            .json(&json!({ "nom": "Aqua" }))
            .expect_failure()
            .await;

        assert_eq!(response.json::<ApiErrorResponse>().status, 400);
    }
}
