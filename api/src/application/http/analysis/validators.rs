use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeTextValidator {
    /// Comma-separated ingredient list as printed on the packaging
    #[validate(length(min = 1, message = "ingredients_text is required"))]
    pub ingredients_text: String,

    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub barcode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_product_fields_default_to_none() {
        let payload: AnalyzeTextValidator =
            serde_json::from_str(r#"{"ingredients_text":"Aqua, Parfum"}"#).unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.product_name, None);
        assert_eq!(payload.barcode, None);
    }

    #[test]
    fn empty_text_is_rejected() {
        let payload: AnalyzeTextValidator =
            serde_json::from_str(r#"{"ingredients_text":""}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
