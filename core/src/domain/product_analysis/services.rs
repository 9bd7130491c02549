use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::UserRoleRepository, value_objects::AuthorizationContext},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    diagnostic::ports::{DiagnosticClassifier, DiagnosticRepository},
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    product::ports::ProductRepository,
    product_analysis::{
        entities::{ProductAnalysis, ScanHistoryEntry, ScanStats},
        history::{compute_stats, filter_history},
        matcher::match_ingredients,
        parser::parse_ingredients,
        ports::{
            ProductAnalysisService, ProductLookup, ScanHistoryPolicy, ScanHistoryRepository,
            ScanHistoryService,
        },
        risk::aggregate,
        value_objects::{AnalyzeIngredientsInput, ScanHistoryFilter},
    },
    routine::ports::RoutineRepository,
};

const UNNAMED_PRODUCT: &str = "Produit sans nom";

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
    async fn build_analysis(
        &self,
        ingredients: Vec<String>,
        product_name: String,
        brand: Option<String>,
        barcode: Option<String>,
    ) -> Result<ProductAnalysis, CoreError> {
        let product_id = match barcode.as_deref() {
            Some(barcode) if !barcode.trim().is_empty() => self
                .product_repository
                .get_by_barcode(barcode.trim().to_string())
                .await?
                .map(|product| product.id),
            _ => None,
        };

        let catalog = self.ingredient_repository.fetch_catalog().await?;
        let matches = match_ingredients(&ingredients, &catalog);
        let summary = aggregate(&matches);

        Ok(ProductAnalysis {
            product_id,
            product_name,
            brand,
            barcode,
            categories: None,
            image_url: None,
            ingredients,
            matches,
            risk_label: summary.overall_tier.label().to_string(),
            summary,
        })
    }

    /// History is a convenience for the user; a failed write does not fail the scan.
    async fn remember_scan(&self, context: &AuthorizationContext, analysis: &ProductAnalysis) {
        let entry = ScanHistoryEntry::new(
            context.user_id,
            analysis.product_name.clone(),
            analysis.brand.clone(),
            analysis.barcode.clone(),
        )
        .with_product(analysis.product_id);

        if let Err(e) = self.scan_history_repository.record_scan(entry).await {
            warn!(user_id = %context.user_id, "Failed to record scan history: {}", e);
        }
    }
}

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> ProductAnalysisService
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
    #[instrument(skip(self, context, input), fields(user_id = %context.user_id))]
    async fn analyze_ingredients(
        &self,
        context: AuthorizationContext,
        input: AnalyzeIngredientsInput,
    ) -> Result<ProductAnalysis, CoreError> {
        let ingredients = parse_ingredients(&input.ingredients_text);
        if ingredients.is_empty() {
            return Err(CoreError::validation(
                "ingredients_text",
                "no ingredient could be read from the text",
            ));
        }

        let product_name = input
            .product_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

        let analysis = self
            .build_analysis(ingredients, product_name, input.brand, input.barcode)
            .await?;
        self.remember_scan(&context, &analysis).await;

        info!(
            ingredients = analysis.ingredients.len(),
            dangerous = analysis.summary.dangerous_count,
            unknown = analysis.summary.unknown_count,
            "Ingredient list analysed"
        );

        Ok(analysis)
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn analyze_barcode(
        &self,
        context: AuthorizationContext,
        barcode: String,
    ) -> Result<Option<ProductAnalysis>, CoreError> {
        let barcode = barcode.trim().to_string();
        if barcode.is_empty() {
            return Err(CoreError::validation("barcode", "must not be empty"));
        }

        let Some(product) = self.product_lookup.find_by_barcode(barcode.clone()).await? else {
            info!(barcode = %barcode, "Barcode not found");
            return Ok(None);
        };

        let ingredients = product
            .ingredients_text
            .as_deref()
            .map(parse_ingredients)
            .unwrap_or_default();
        let product_name = product
            .product_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

        let mut analysis = self
            .build_analysis(ingredients, product_name, product.brands, Some(barcode))
            .await?;
        analysis.categories = product.categories;
        analysis.image_url = product.image_url;

        self.remember_scan(&context, &analysis).await;

        info!(
            ingredients = analysis.ingredients.len(),
            overall = u8::from(analysis.summary.overall_tier),
            "Barcode analysed"
        );

        Ok(Some(analysis))
    }
}

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> ScanHistoryService
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
    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn list_scan_history(
        &self,
        context: AuthorizationContext,
        filter: ScanHistoryFilter,
    ) -> Result<Vec<ScanHistoryEntry>, CoreError> {
        let entries = self
            .scan_history_repository
            .list_by_user(context.user_id)
            .await?;

        Ok(filter_history(entries, &filter, Utc::now()))
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn scan_stats(&self, context: AuthorizationContext) -> Result<ScanStats, CoreError> {
        let entries = self
            .scan_history_repository
            .list_by_user(context.user_id)
            .await?;

        Ok(compute_stats(&entries, Utc::now()))
    }

    #[instrument(skip(self, context), fields(user_id = %context.user_id))]
    async fn delete_scan(
        &self,
        context: AuthorizationContext,
        scan_id: Uuid,
    ) -> Result<(), CoreError> {
        let entry = self
            .scan_history_repository
            .get_by_id(scan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_delete_scan(&context, &entry).await,
            "scan history entries can only be deleted by their owner",
        )?;

        self.scan_history_repository.delete_scan(scan_id).await?;

        info!(scan_id = %scan_id, "Scan deleted");

        Ok(())
    }
}
