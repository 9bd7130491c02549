use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of both create and update; blank ingredient lines are dropped by the core.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductValidator {
    #[validate(length(min = 1, max = 200, message = "name must be 1 to 200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "brand must be at most 100 characters"))]
    pub brand: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "barcode must be at most 100 characters"))]
    pub barcode: Option<String>,

    #[serde(default, rename = "type")]
    #[validate(length(max = 100, message = "type must be at most 100 characters"))]
    pub product_type: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "category must be at most 100 characters"))]
    pub category: Option<String>,

    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProductValidator {
        ProductValidator {
            name: "Crème hydratante".to_string(),
            brand: Some("Avène".to_string()),
            barcode: Some("3282770100235".to_string()),
            product_type: Some("Crème".to_string()),
            category: Some("Visage".to_string()),
            ingredients: vec!["Aqua".to_string(), "Glycerin".to_string()],
        }
    }

    #[test]
    fn accepts_a_complete_product() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn type_is_read_from_the_type_key() {
        let payload: ProductValidator = serde_json::from_value(serde_json::json!({
            "name": "Shampooing doux",
            "type": "Shampooing",
            "ingredients": ["Aqua"]
        }))
        .unwrap();

        assert_eq!(payload.product_type.as_deref(), Some("Shampooing"));
        assert!(payload.brand.is_none());
    }

    #[test]
    fn rejects_empty_name_and_ingredient_list() {
        let mut payload = payload();
        payload.name = String::new();
        payload.ingredients.clear();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("ingredients"));
    }
}
