use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::entities::app_errors::CoreError,
    diagnostic::{
        classifier::ClassificationError,
        entities::{Diagnostic, DiagnosticKind, DiagnosticResult},
        value_objects::{DiagnosticAnswers, GetDiagnosticsFilter},
    },
};

/// One chat-completion exchange: a system prompt and a user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: Option<f32>,
}

/// Text generation through a hosted chat-completion gateway.
///
/// Implementations report throttling as [`CoreError::RateLimited`] and
/// exhausted credits as [`CoreError::PaymentRequired`].
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Turns questionnaire answers into a result.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticClassifier: Send + Sync {
    fn classify(
        &self,
        answers: DiagnosticAnswers,
    ) -> impl Future<Output = Result<DiagnosticResult, ClassificationError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticRepository: Send + Sync {
    fn create_diagnostic(
        &self,
        diagnostic: Diagnostic,
    ) -> impl Future<Output = Result<Diagnostic, CoreError>> + Send;

    fn get_latest_by_user(
        &self,
        user_id: Uuid,
        kind: DiagnosticKind,
    ) -> impl Future<Output = Result<Option<Diagnostic>, CoreError>> + Send;

    /// Newest first.
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Diagnostic>, CoreError>> + Send;

    fn list_all(
        &self,
        filter: GetDiagnosticsFilter,
    ) -> impl Future<Output = Result<Vec<Diagnostic>, CoreError>> + Send;

    fn get_by_id(
        &self,
        diagnostic_id: Uuid,
    ) -> impl Future<Output = Result<Option<Diagnostic>, CoreError>> + Send;

    fn delete_diagnostic(
        &self,
        diagnostic_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticService: Send + Sync {
    fn submit_diagnostic(
        &self,
        context: AuthorizationContext,
        answers: DiagnosticAnswers,
    ) -> impl Future<Output = Result<Diagnostic, CoreError>> + Send;

    fn get_latest_diagnostic(
        &self,
        context: AuthorizationContext,
        kind: DiagnosticKind,
    ) -> impl Future<Output = Result<Diagnostic, CoreError>> + Send;

    fn list_diagnostics(
        &self,
        context: AuthorizationContext,
    ) -> impl Future<Output = Result<Vec<Diagnostic>, CoreError>> + Send;

    fn list_all_diagnostics(
        &self,
        context: AuthorizationContext,
        filter: GetDiagnosticsFilter,
    ) -> impl Future<Output = Result<Vec<Diagnostic>, CoreError>> + Send;

    fn delete_diagnostic(
        &self,
        context: AuthorizationContext,
        diagnostic_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait DiagnosticPolicy: Send + Sync {
    fn can_view_all_diagnostics(
        &self,
        context: &AuthorizationContext,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_delete_diagnostic(
        &self,
        context: &AuthorizationContext,
        diagnostic: &Diagnostic,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
