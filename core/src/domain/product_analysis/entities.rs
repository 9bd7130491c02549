use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7, ingredient::entities::Ingredient,
    product_analysis::risk::ProductRiskSummary,
};

/// A parsed ingredient name and the catalog entry it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientMatch {
    pub raw_name: String,
    pub record: Option<Ingredient>,
    /// Display label of the matched tier, `None` when the ingredient is unknown.
    pub hazard_label: Option<String>,
}

impl IngredientMatch {
    pub fn new(raw_name: String, record: Option<Ingredient>) -> Self {
        let hazard_label = record
            .as_ref()
            .and_then(|record| record.hazard_tier)
            .map(|tier| tier.label().to_string());

        Self {
            raw_name,
            record,
            hazard_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductAnalysis {
    /// Catalog product sharing the scanned barcode.
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    pub categories: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub matches: Vec<IngredientMatch>,
    pub summary: ProductRiskSummary,
    pub risk_label: String,
}

/// Product data returned by the barcode lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExternalProduct {
    pub barcode: String,
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub categories: Option<String>,
    pub ingredients_text: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanHistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub product_brand: Option<String>,
    pub barcode: Option<String>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanHistoryEntry {
    pub fn new(
        user_id: Uuid,
        product_name: String,
        product_brand: Option<String>,
        barcode: Option<String>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            product_id: None,
            product_name,
            product_brand,
            barcode,
            scanned_at: Utc::now(),
        }
    }

    pub fn with_product(mut self, product_id: Option<Uuid>) -> Self {
        self.product_id = product_id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub total_scans: usize,
    pub unique_products: usize,
    pub most_scanned_product: Option<String>,
    pub scans_this_week: usize,
}
