use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::UserRoleRepository, value_objects::AuthorizationContext},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    diagnostic::ports::{DiagnosticClassifier, DiagnosticRepository},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    product::ports::ProductRepository,
    product_analysis::ports::{ProductLookup, ScanHistoryRepository},
    routine::{
        entities::Routine,
        ports::{RoutinePolicy, RoutineRepository, RoutineService},
        value_objects::{CreateRoutineInput, GetRoutinesFilter, RoutineFields, UpdateRoutineInput},
    },
};

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> RoutineService
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
    #[instrument(skip(self))]
    async fn list_routines(&self, filter: GetRoutinesFilter) -> Result<Vec<Routine>, CoreError> {
        let filter = GetRoutinesFilter {
            routine_type: filter
                .routine_type
                .map(|routine_type| routine_type.trim().to_string())
                .filter(|routine_type| !routine_type.is_empty()),
        };

        self.routine_repository.list_routines(filter).await
    }

    #[instrument(skip(self))]
    async fn get_routine(&self, routine_id: Uuid) -> Result<Routine, CoreError> {
        self.routine_repository
            .get_by_id(routine_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn create_routine(
        &self,
        context: AuthorizationContext,
        input: CreateRoutineInput,
    ) -> Result<Routine, CoreError> {
        ensure_policy(
            self.policy.can_manage_routines(&context).await,
            "only administrators can edit routines",
        )?;

        let fields = RoutineFields::validate(
            &input.title,
            input.description.as_deref(),
            &input.step,
            &input.routine_type,
            input.order_index,
            &input.recommended_for,
        )?;

        let routine = self
            .routine_repository
            .create_routine(Routine::new(fields))
            .await?;

        info!(routine_id = %routine.id, routine_type = %routine.routine_type, "Routine created");

        Ok(routine)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn update_routine(
        &self,
        context: AuthorizationContext,
        input: UpdateRoutineInput,
    ) -> Result<Routine, CoreError> {
        ensure_policy(
            self.policy.can_manage_routines(&context).await,
            "only administrators can edit routines",
        )?;

        let fields = RoutineFields::validate(
            &input.title,
            input.description.as_deref(),
            &input.step,
            &input.routine_type,
            input.order_index,
            &input.recommended_for,
        )?;

        let mut routine = self
            .routine_repository
            .get_by_id(input.routine_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        routine.update(fields);
        let updated = self.routine_repository.update_routine(routine).await?;

        info!(routine_id = %updated.id, "Routine updated");

        Ok(updated)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn delete_routine(
        &self,
        context: AuthorizationContext,
        routine_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_routines(&context).await,
            "only administrators can edit routines",
        )?;

        self.routine_repository
            .get_by_id(routine_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.routine_repository.delete_routine(routine_id).await?;

        info!(routine_id = %routine_id, "Routine deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::value_objects::Role, common::services::test_support::ServiceMocks,
    };

    fn admin() -> AuthorizationContext {
        AuthorizationContext::new(Uuid::new_v4(), vec![Role::Admin])
    }

    fn member() -> AuthorizationContext {
        AuthorizationContext::new(Uuid::new_v4(), vec![])
    }

    fn cleansing() -> Routine {
        Routine::new(RoutineFields {
            title: "Nettoyage doux".to_string(),
            description: None,
            step: "1".to_string(),
            routine_type: "matin".to_string(),
            order_index: 0,
            recommended_for: vec![],
        })
    }

    fn create_input(title: &str) -> CreateRoutineInput {
        CreateRoutineInput {
            title: title.to_string(),
            description: Some("Nettoyant sans sulfates".to_string()),
            step: "1".to_string(),
            routine_type: "matin".to_string(),
            order_index: None,
            recommended_for: vec!["peau sèche".to_string()],
        }
    }

    #[tokio::test]
    async fn blank_type_filter_lists_every_routine() {
        let mut mocks = ServiceMocks::new();
        mocks
            .routines
            .expect_list_routines()
            .withf(|filter| filter.routine_type.is_none())
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![cleansing()]) }));

        let service = mocks.into_service();
        let routines = service
            .list_routines(GetRoutinesFilter {
                routine_type: Some("  ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(routines.len(), 1);
    }

    #[tokio::test]
    async fn create_requires_admin() {
        let mut mocks = ServiceMocks::new();
        mocks.routines.expect_create_routine().never();

        let service = mocks.into_service();
        assert!(matches!(
            service.create_routine(member(), create_input("Nettoyage")).await,
            Err(CoreError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn create_validates_before_storing() {
        let mut mocks = ServiceMocks::new();
        mocks.routines.expect_create_routine().never();

        let service = mocks.into_service();
        let result = service.create_routine(admin(), create_input("N")).await;

        assert!(matches!(result, Err(CoreError::Validation { ref field, .. }) if field == "title"));
    }

    #[tokio::test]
    async fn create_stores_a_default_position() {
        let mut mocks = ServiceMocks::new();
        mocks
            .routines
            .expect_create_routine()
            .withf(|routine| routine.order_index == 0 && routine.recommended_for == ["peau sèche"])
            .times(1)
            .returning(|routine| Box::pin(async move { Ok(routine) }));

        let service = mocks.into_service();
        let created = service
            .create_routine(admin(), create_input("Nettoyage"))
            .await
            .unwrap();

        assert_eq!(created.routine_type, "matin");
    }

    #[tokio::test]
    async fn update_of_missing_routine_is_not_found() {
        let mut mocks = ServiceMocks::new();
        mocks
            .routines
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.routines.expect_update_routine().never();

        let service = mocks.into_service();
        let result = service
            .update_routine(
                admin(),
                UpdateRoutineInput {
                    routine_id: Uuid::new_v4(),
                    title: "Nettoyage".to_string(),
                    description: None,
                    step: "2".to_string(),
                    routine_type: "soir".to_string(),
                    order_index: Some(1),
                    recommended_for: vec![],
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn update_moves_the_step() {
        let existing = cleansing();
        let id = existing.id;

        let mut mocks = ServiceMocks::new();
        mocks.routines.expect_get_by_id().returning(move |_| {
            let found = existing.clone();
            Box::pin(async move { Ok(Some(found)) })
        });
        mocks
            .routines
            .expect_update_routine()
            .times(1)
            .returning(|routine| Box::pin(async move { Ok(routine) }));

        let service = mocks.into_service();
        let updated = service
            .update_routine(
                admin(),
                UpdateRoutineInput {
                    routine_id: id,
                    title: "Démaquillage".to_string(),
                    description: None,
                    step: "1".to_string(),
                    routine_type: "soir".to_string(),
                    order_index: Some(3),
                    recommended_for: vec![],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.routine_type, "soir");
        assert_eq!(updated.order_index, 3);
    }

    #[tokio::test]
    async fn delete_requires_admin_and_existing_routine() {
        let mut mocks = ServiceMocks::new();
        mocks
            .routines
            .expect_get_by_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.routines.expect_delete_routine().never();

        let service = mocks.into_service();
        assert!(matches!(
            service.delete_routine(member(), Uuid::new_v4()).await,
            Err(CoreError::Forbidden(_))
        ));
        assert_eq!(
            service.delete_routine(admin(), Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        );
    }
}
