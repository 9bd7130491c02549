use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of both create and update; the core trims and re-checks lengths.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct IngredientValidator {
    #[validate(length(min = 2, max = 200, message = "name must be 2 to 200 characters"))]
    pub name: String,

    #[validate(range(max = 3, message = "hazard_tier must be between 0 and 3"))]
    pub hazard_tier: u8,

    #[serde(default)]
    #[validate(length(max = 100, message = "category must be at most 100 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
}
