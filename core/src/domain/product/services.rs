use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::UserRoleRepository, value_objects::AuthorizationContext},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    diagnostic::ports::{DiagnosticClassifier, DiagnosticRepository},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    product::{
        entities::{Product, ProductDetail},
        ports::{ProductPolicy, ProductRepository, ProductService},
        value_objects::{CreateProductInput, GetProductsFilter, ProductFields, UpdateProductInput},
    },
    product_analysis::{
        matcher::match_ingredients,
        ports::{ProductLookup, ScanHistoryRepository},
        risk::{BucketScheme, aggregate_with},
    },
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
    /// A barcode resolves to at most one catalog product.
    async fn ensure_barcode_available(
        &self,
        barcode: Option<&str>,
        current_id: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let Some(barcode) = barcode else {
            return Ok(());
        };

        let existing = self
            .product_repository
            .get_by_barcode(barcode.to_string())
            .await?;

        match existing {
            Some(product) if Some(product.id) != current_id => Err(CoreError::validation(
                "barcode",
                "a product with this barcode already exists",
            )),
            _ => Ok(()),
        }
    }
}

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> ProductService
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
    async fn list_products(&self, filter: GetProductsFilter) -> Result<Vec<Product>, CoreError> {
        self.product_repository.list_products(filter).await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: Uuid) -> Result<Product, CoreError> {
        self.product_repository
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_product_detail(&self, product_id: Uuid) -> Result<ProductDetail, CoreError> {
        let product = self.get_product(product_id).await?;

        let catalog = self.ingredient_repository.fetch_catalog().await?;
        let matches = match_ingredients(&product.ingredients, &catalog);
        let summary = aggregate_with(&matches, BucketScheme::TwoBucket);

        Ok(ProductDetail {
            product,
            matches,
            risk_label: summary.overall_tier.label().to_string(),
            summary,
        })
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn create_product(
        &self,
        context: AuthorizationContext,
        input: CreateProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(
            self.policy.can_manage_products(&context).await,
            "only administrators can edit the product catalog",
        )?;

        let fields = ProductFields::validate(
            &input.name,
            input.brand.as_deref(),
            input.barcode.as_deref(),
            input.product_type.as_deref(),
            input.category.as_deref(),
            &input.ingredients,
        )?;
        self.ensure_barcode_available(fields.barcode.as_deref(), None)
            .await?;

        let product = self
            .product_repository
            .create_product(Product::new(fields))
            .await?;

        info!(product_id = %product.id, name = %product.name, "Product created");

        Ok(product)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn update_product(
        &self,
        context: AuthorizationContext,
        input: UpdateProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(
            self.policy.can_manage_products(&context).await,
            "only administrators can edit the product catalog",
        )?;

        let fields = ProductFields::validate(
            &input.name,
            input.brand.as_deref(),
            input.barcode.as_deref(),
            input.product_type.as_deref(),
            input.category.as_deref(),
            &input.ingredients,
        )?;

        let mut product = self
            .product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if fields.barcode != product.barcode {
            self.ensure_barcode_available(fields.barcode.as_deref(), Some(product.id))
                .await?;
        }

        product.update(fields);
        let updated = self.product_repository.update_product(product).await?;

        info!(product_id = %updated.id, "Product updated");

        Ok(updated)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn delete_product(
        &self,
        context: AuthorizationContext,
        product_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_products(&context).await,
            "only administrators can edit the product catalog",
        )?;

        self.product_repository
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_repository.delete_product(product_id).await?;

        info!(product_id = %product_id, "Product deleted");

        Ok(())
    }
}
