use chrono::Utc;
use tracing::warn;

use crate::domain::ingredient::{entities::Ingredient, value_objects::HazardTier};
use crate::entity::global_ingredients::Model as IngredientModel;

/// Unreadable levels are treated as "no tier" so the entry counts as unknown.
fn hazard_tier(model: &IngredientModel) -> Option<HazardTier> {
    let raw = model.danger_level.as_deref()?;
    let tier = HazardTier::from_catalog_value(raw);
    if tier.is_none() {
        warn!(ingredient = %model.name, danger_level = %raw, "Ignoring unreadable danger level");
    }
    tier
}

impl From<IngredientModel> for Ingredient {
    fn from(model: IngredientModel) -> Self {
        let hazard_tier = hazard_tier(&model);
        Ingredient {
            id: model.id,
            name: model.name,
            hazard_tier,
            category: model.category,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<&IngredientModel> for Ingredient {
    fn from(model: &IngredientModel) -> Self {
        Ingredient::from(model.clone())
    }
}
