use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::UserRoleRepository, value_objects::AuthorizationContext},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    diagnostic::{
        classifier::ClassificationError,
        entities::{Diagnostic, DiagnosticKind},
        ports::{DiagnosticClassifier, DiagnosticPolicy, DiagnosticRepository, DiagnosticService},
        value_objects::{DiagnosticAnswers, GetDiagnosticsFilter},
    },
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    product::ports::ProductRepository,
    product_analysis::ports::{ProductLookup, ScanHistoryRepository},
    routine::ports::RoutineRepository,
};

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> DiagnosticService
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
    #[instrument(skip(self, context, answers), fields(user_id = %context.user_id, kind = %answers.kind()))]
    async fn submit_diagnostic(
        &self,
        context: AuthorizationContext,
        answers: DiagnosticAnswers,
    ) -> Result<Diagnostic, CoreError> {
        answers.validate()?;

        let kind = answers.kind();
        let stored_answers = answers.to_json()?;

        let (result, used_fallback) = match self.classifier.classify(answers).await {
            Ok(result) => (result, false),
            Err(ClassificationError::ShapeMismatch { fallback, reason }) => {
                warn!(reason = %reason, "Storing default diagnostic result");
                (*fallback, true)
            }
            Err(e) => return Err(e.into()),
        };

        let result = serde_json::to_value(&result).map_err(|e| {
            tracing::error!("Failed to serialize diagnostic result: {}", e);
            CoreError::InternalServerError
        })?;

        let diagnostic = self
            .diagnostic_repository
            .create_diagnostic(Diagnostic::new(
                context.user_id,
                kind,
                stored_answers,
                result,
                used_fallback,
            ))
            .await?;

        info!(diagnostic_id = %diagnostic.id, used_fallback, "Diagnostic stored");

        Ok(diagnostic)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn get_latest_diagnostic(
        &self,
        context: AuthorizationContext,
        kind: DiagnosticKind,
    ) -> Result<Diagnostic, CoreError> {
        self.diagnostic_repository
            .get_latest_by_user(context.user_id, kind)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn list_diagnostics(
        &self,
        context: AuthorizationContext,
    ) -> Result<Vec<Diagnostic>, CoreError> {
        self.diagnostic_repository
            .list_by_user(context.user_id)
            .await
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn list_all_diagnostics(
        &self,
        context: AuthorizationContext,
        filter: GetDiagnosticsFilter,
    ) -> Result<Vec<Diagnostic>, CoreError> {
        ensure_policy(
            self.policy.can_view_all_diagnostics(&context).await,
            "only administrators can list every diagnostic",
        )?;

        self.diagnostic_repository.list_all(filter).await
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn delete_diagnostic(
        &self,
        context: AuthorizationContext,
        diagnostic_id: Uuid,
    ) -> Result<(), CoreError> {
        let diagnostic = self
            .diagnostic_repository
            .get_by_id(diagnostic_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy
                .can_delete_diagnostic(&context, &diagnostic)
                .await,
            "insufficient permissions to delete this diagnostic",
        )?;

        self.diagnostic_repository
            .delete_diagnostic(diagnostic_id)
            .await?;

        info!(diagnostic_id = %diagnostic_id, "Diagnostic deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::value_objects::Role,
        common::services::test_support::ServiceMocks,
        diagnostic::{
            beauty::beauty_fallback,
            entities::DiagnosticResult,
            skin::score_skin,
            value_objects::fixtures::{beauty_answers, skin_answers},
        },
    };

    fn user() -> AuthorizationContext {
        AuthorizationContext::new(Uuid::new_v4(), vec![])
    }

    fn stored(user_id: Uuid, kind: DiagnosticKind) -> Diagnostic {
        Diagnostic::new(
            user_id,
            kind,
            serde_json::json!({}),
            serde_json::json!({}),
            false,
        )
    }

    #[tokio::test]
    async fn skin_submission_is_scored_and_stored() {
        let context = user();
        let user_id = context.user_id;

        let mut mocks = ServiceMocks::new();
        mocks.classifier.expect_classify().times(1).returning(|answers| {
            let DiagnosticAnswers::Skin(skin) = answers else {
                unreachable!()
            };
            Box::pin(async move { Ok(DiagnosticResult::Skin(score_skin(&skin))) })
        });
        mocks
            .diagnostics
            .expect_create_diagnostic()
            .withf(move |d| {
                d.user_id == user_id
                    && d.kind == DiagnosticKind::Skin
                    && !d.used_fallback
                    && d.answers["q1"] == "A"
                    && d.result["type_peau"] == "sèche"
            })
            .times(1)
            .returning(|d| Box::pin(async move { Ok(d) }));

        let service = mocks.into_service();
        let diagnostic = service
            .submit_diagnostic(context, DiagnosticAnswers::Skin(skin_answers()))
            .await
            .unwrap();

        assert_eq!(diagnostic.result["etat_peau"], "déshydratée");
    }

    #[tokio::test]
    async fn invalid_answers_never_reach_the_classifier() {
        let mut answers = skin_answers();
        answers.q1 = "Z".to_string();

        let mut mocks = ServiceMocks::new();
        mocks.classifier.expect_classify().never();
        mocks.diagnostics.expect_create_diagnostic().never();

        let service = mocks.into_service();
        let result = service
            .submit_diagnostic(user(), DiagnosticAnswers::Skin(answers))
            .await;

        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[tokio::test]
    async fn shape_mismatch_stores_the_fallback_and_flags_it() {
        let mut mocks = ServiceMocks::new();
        mocks.classifier.expect_classify().returning(|answers| {
            let DiagnosticAnswers::Beauty(beauty) = answers else {
                unreachable!()
            };
            Box::pin(async move {
                Err(ClassificationError::ShapeMismatch {
                    fallback: Box::new(DiagnosticResult::Beauty(beauty_fallback(&beauty))),
                    reason: "expected value at line 1 column 1".to_string(),
                })
            })
        });
        mocks
            .diagnostics
            .expect_create_diagnostic()
            .withf(|d| d.used_fallback && d.kind == DiagnosticKind::Beauty)
            .times(1)
            .returning(|d| Box::pin(async move { Ok(d) }));

        let service = mocks.into_service();
        let diagnostic = service
            .submit_diagnostic(user(), DiagnosticAnswers::Beauty(beauty_answers()))
            .await
            .unwrap();

        assert!(diagnostic.used_fallback);
        assert_eq!(
            diagnostic.result["beauty_profile"]["profile_category"],
            "Débutante"
        );
        assert_eq!(diagnostic.answers["sunExposure"], "Forte");
    }

    #[tokio::test]
    async fn gateway_throttling_is_surfaced_and_nothing_is_stored() {
        let mut mocks = ServiceMocks::new();
        mocks
            .classifier
            .expect_classify()
            .returning(|_| Box::pin(async { Err(ClassificationError::PaymentRequired) }));
        mocks.diagnostics.expect_create_diagnostic().never();

        let service = mocks.into_service();
        let result = service
            .submit_diagnostic(user(), DiagnosticAnswers::Beauty(beauty_answers()))
            .await;

        assert_eq!(result, Err(CoreError::PaymentRequired));
    }

    #[tokio::test]
    async fn latest_without_any_diagnostic_is_not_found() {
        let mut mocks = ServiceMocks::new();
        mocks
            .diagnostics
            .expect_get_latest_by_user()
            .withf(|_, kind| *kind == DiagnosticKind::Hair)
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        assert_eq!(
            service
                .get_latest_diagnostic(user(), DiagnosticKind::Hair)
                .await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn listing_everything_is_admin_only() {
        let mut mocks = ServiceMocks::new();
        mocks
            .diagnostics
            .expect_list_all()
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        let service = mocks.into_service();
        assert!(matches!(
            service
                .list_all_diagnostics(user(), GetDiagnosticsFilter::default())
                .await,
            Err(CoreError::Forbidden(_))
        ));

        let admin = AuthorizationContext::new(Uuid::new_v4(), vec![Role::Admin]);
        assert_eq!(
            service
                .list_all_diagnostics(admin, GetDiagnosticsFilter::default())
                .await,
            Ok(vec![])
        );
    }

    #[tokio::test]
    async fn owners_and_admins_may_delete() {
        let owner = user();
        let diagnostic = stored(owner.user_id, DiagnosticKind::Skin);
        let diagnostic_id = diagnostic.id;

        let mut mocks = ServiceMocks::new();
        mocks.diagnostics.expect_get_by_id().returning(move |_| {
            let found = diagnostic.clone();
            Box::pin(async move { Ok(Some(found)) })
        });
        mocks
            .diagnostics
            .expect_delete_diagnostic()
            .times(2)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = mocks.into_service();
        assert!(matches!(
            service.delete_diagnostic(user(), diagnostic_id).await,
            Err(CoreError::Forbidden(_))
        ));
        assert_eq!(service.delete_diagnostic(owner, diagnostic_id).await, Ok(()));

        let admin = AuthorizationContext::new(Uuid::new_v4(), vec![Role::Admin]);
        assert_eq!(service.delete_diagnostic(admin, diagnostic_id).await, Ok(()));
    }
}
