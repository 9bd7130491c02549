use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    ingredient::value_objects::{HazardTier, IngredientFields},
};

/// One entry of the hazard catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = Option<u8>, minimum = 0, maximum = 3)]
    pub hazard_tier: Option<HazardTier>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(fields: IngredientFields) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            name: fields.name,
            hazard_tier: Some(fields.hazard_tier),
            category: fields.category,
            description: fields.description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, fields: IngredientFields) {
        self.name = fields.name;
        self.hazard_tier = Some(fields.hazard_tier);
        self.category = fields.category;
        self.description = fields.description;
        self.updated_at = Utc::now();
    }
}
