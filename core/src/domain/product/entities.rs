use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    product::value_objects::ProductFields,
    product_analysis::{entities::IngredientMatch, risk::ProductRiskSummary},
};

/// A product of the shared catalog with its curated ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub ingredients: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(fields: ProductFields) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            name: fields.name,
            brand: fields.brand,
            barcode: fields.barcode,
            product_type: fields.product_type,
            category: fields.category,
            ingredients: fields.ingredients,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.brand = fields.brand;
        self.barcode = fields.barcode;
        self.product_type = fields.product_type;
        self.category = fields.category;
        self.ingredients = fields.ingredients;
        self.updated_at = Utc::now();
    }
}

/// Catalog product with its ingredients resolved against the hazard catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub matches: Vec<IngredientMatch>,
    pub summary: ProductRiskSummary,
    pub risk_label: String,
}
