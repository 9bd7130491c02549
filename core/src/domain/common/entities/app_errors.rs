use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid value for `{field}`: {message}")]
    Validation { field: String, message: String },

    #[error("Missing or invalid access token")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The generative gateway throttled the request (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The generative gateway refused the request for lack of credits (HTTP 402)
    #[error("Payment required")]
    PaymentRequired,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
