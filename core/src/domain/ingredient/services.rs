use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::UserRoleRepository, value_objects::AuthorizationContext},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    diagnostic::ports::{DiagnosticClassifier, DiagnosticRepository},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientPolicy, IngredientRepository, IngredientService},
        value_objects::{
            CreateIngredientInput, GetIngredientsFilter, IngredientFields, IngredientLookup,
            UpdateIngredientInput,
        },
    },
    product::ports::ProductRepository,
    product_analysis::ports::{ProductLookup, ScanHistoryRepository},
    routine::ports::RoutineRepository,
};

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> Service<IR, PR, RR, SH, DR, UR, HC, PL, DC>
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
    /// Names are the catalog key; another entry may not already hold it.
    async fn ensure_name_available(
        &self,
        name: &str,
        current_id: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let existing = self
            .ingredient_repository
            .get_by_name(name.to_string())
            .await?;

        match existing {
            Some(ingredient) if Some(ingredient.id) != current_id => Err(CoreError::validation(
                "name",
                "an ingredient with this name already exists",
            )),
            _ => Ok(()),
        }
    }
}

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> IngredientService
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
    async fn list_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.list_ingredients(filter).await
    }

    #[instrument(skip(self))]
    async fn get_ingredient(&self, id_or_name: String) -> Result<Ingredient, CoreError> {
        let ingredient = match IngredientLookup::from(id_or_name.as_str()) {
            IngredientLookup::Id(id) => self.ingredient_repository.get_by_id(id).await?,
            IngredientLookup::Name(name) => self.ingredient_repository.get_by_name(name).await?,
        };

        ingredient.ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn create_ingredient(
        &self,
        context: AuthorizationContext,
        input: CreateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&context).await,
            "only administrators can edit the ingredient catalog",
        )?;

        let fields = IngredientFields::validate(
            &input.name,
            input.hazard_tier,
            input.category.as_deref(),
            input.description.as_deref(),
        )?;
        self.ensure_name_available(&fields.name, None).await?;

        let ingredient = self
            .ingredient_repository
            .create_ingredient(Ingredient::new(fields))
            .await?;

        info!(ingredient_id = %ingredient.id, name = %ingredient.name, "Ingredient created");

        Ok(ingredient)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn update_ingredient(
        &self,
        context: AuthorizationContext,
        input: UpdateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&context).await,
            "only administrators can edit the ingredient catalog",
        )?;

        let fields = IngredientFields::validate(
            &input.name,
            input.hazard_tier,
            input.category.as_deref(),
            input.description.as_deref(),
        )?;

        let mut ingredient = self
            .ingredient_repository
            .get_by_id(input.ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if fields.name != ingredient.name {
            self.ensure_name_available(&fields.name, Some(ingredient.id))
                .await?;
        }

        ingredient.update(fields);
        let updated = self
            .ingredient_repository
            .update_ingredient(ingredient)
            .await?;

        info!(ingredient_id = %updated.id, "Ingredient updated");

        Ok(updated)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn delete_ingredient(
        &self,
        context: AuthorizationContext,
        ingredient_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&context).await,
            "only administrators can edit the ingredient catalog",
        )?;

        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.ingredient_repository
            .delete_ingredient(ingredient_id)
            .await?;

        info!(ingredient_id = %ingredient_id, "Ingredient deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::value_objects::Role,
        common::services::test_support::ServiceMocks,
        ingredient::value_objects::HazardTier,
    };

    fn admin() -> AuthorizationContext {
        AuthorizationContext::new(Uuid::new_v4(), vec![Role::Admin])
    }

    fn member() -> AuthorizationContext {
        AuthorizationContext::new(Uuid::new_v4(), vec![])
    }

    fn parfum() -> Ingredient {
        Ingredient::new(IngredientFields {
            name: "Parfum".to_string(),
            hazard_tier: HazardTier::Moderate,
            category: Some("Fragrance".to_string()),
            description: None,
        })
    }

    fn create_input(name: &str) -> CreateIngredientInput {
        CreateIngredientInput {
            name: name.to_string(),
            hazard_tier: 2,
            category: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn get_ingredient_uses_id_for_uuids() {
        let existing = parfum();
        let id = existing.id;

        let mut mocks = ServiceMocks::new();
        mocks
            .ingredients
            .expect_get_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(move |_| {
                let found = existing.clone();
                Box::pin(async move { Ok(Some(found)) })
            });
        mocks.ingredients.expect_get_by_name().never();

        let service = mocks.into_service();
        let found = service.get_ingredient(id.to_string()).await.unwrap();
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn get_ingredient_by_unknown_name_is_not_found() {
        let mut mocks = ServiceMocks::new();
        mocks
            .ingredients
            .expect_get_by_name()
            .withf(|name| name == "Aqua")
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        assert_eq!(
            service.get_ingredient("Aqua".to_string()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn create_requires_admin() {
        let mut mocks = ServiceMocks::new();
        mocks.ingredients.expect_create_ingredient().never();

        let service = mocks.into_service();
        let result = service
            .create_ingredient(member(), create_input("Parfum"))
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_touching_storage() {
        let mut mocks = ServiceMocks::new();
        mocks.ingredients.expect_get_by_name().never();
        mocks.ingredients.expect_create_ingredient().never();

        let service = mocks.into_service();
        let result = service.create_ingredient(admin(), create_input(" x ")).await;

        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_names() {
        let mut mocks = ServiceMocks::new();
        mocks
            .ingredients
            .expect_get_by_name()
            .returning(|_| Box::pin(async { Ok(Some(parfum())) }));
        mocks.ingredients.expect_create_ingredient().never();

        let service = mocks.into_service();
        let result = service
            .create_ingredient(admin(), create_input("Parfum"))
            .await;

        assert!(matches!(result, Err(CoreError::Validation { ref field, .. }) if field == "name"));
    }

    #[tokio::test]
    async fn create_persists_trimmed_fields() {
        let mut mocks = ServiceMocks::new();
        mocks
            .ingredients
            .expect_get_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .ingredients
            .expect_create_ingredient()
            .withf(|ingredient| {
                ingredient.name == "Phenoxyethanol"
                    && ingredient.hazard_tier == Some(HazardTier::Moderate)
            })
            .times(1)
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));

        let service = mocks.into_service();
        let created = service
            .create_ingredient(admin(), create_input("  Phenoxyethanol  "))
            .await
            .unwrap();

        assert_eq!(created.name, "Phenoxyethanol");
    }

    #[tokio::test]
    async fn update_of_missing_ingredient_is_not_found() {
        let mut mocks = ServiceMocks::new();
        mocks
            .ingredients
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.ingredients.expect_update_ingredient().never();

        let service = mocks.into_service();
        let result = service
            .update_ingredient(
                admin(),
                UpdateIngredientInput {
                    ingredient_id: Uuid::new_v4(),
                    name: "Parfum".to_string(),
                    hazard_tier: 3,
                    category: None,
                    description: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn update_keeps_id_and_changes_tier() {
        let existing = parfum();
        let id = existing.id;

        let mut mocks = ServiceMocks::new();
        mocks.ingredients.expect_get_by_id().returning(move |_| {
            let found = existing.clone();
            Box::pin(async move { Ok(Some(found)) })
        });
        mocks.ingredients.expect_get_by_name().never();
        mocks
            .ingredients
            .expect_update_ingredient()
            .times(1)
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));

        let service = mocks.into_service();
        let updated = service
            .update_ingredient(
                admin(),
                UpdateIngredientInput {
                    ingredient_id: id,
                    name: "Parfum".to_string(),
                    hazard_tier: 3,
                    category: None,
                    description: Some("Allergène fréquent".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.hazard_tier, Some(HazardTier::High));
        assert_eq!(updated.category, None);
    }

    #[tokio::test]
    async fn delete_requires_admin_and_existing_entry() {
        let mut mocks = ServiceMocks::new();
        mocks
            .ingredients
            .expect_get_by_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.ingredients.expect_delete_ingredient().never();

        let service = mocks.into_service();
        assert!(matches!(
            service.delete_ingredient(member(), Uuid::new_v4()).await,
            Err(CoreError::Forbidden(_))
        ));
        assert_eq!(
            service.delete_ingredient(admin(), Uuid::new_v4()).await,
            Err(CoreError::NotFound)
        );
    }
}
