use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetProductsFilter {
    /// Case-insensitive part of the name, brand or barcode.
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateProductInput {
    pub product_id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub ingredients: Vec<String>,
}

/// Product fields after trimming and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub brand: Option<String>,
    pub barcode: Option<String>,
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub ingredients: Vec<String>,
}

const NAME_MAX_CHARS: usize = 200;
const TEXT_MAX_CHARS: usize = 100;
const INGREDIENT_MAX_CHARS: usize = 200;

impl ProductFields {
    pub fn validate(
        name: &str,
        brand: Option<&str>,
        barcode: Option<&str>,
        product_type: Option<&str>,
        category: Option<&str>,
        ingredients: &[String],
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "is required"));
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(CoreError::validation(
                "name",
                format!("must not exceed {} characters", NAME_MAX_CHARS),
            ));
        }

        let ingredients: Vec<String> = ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_string)
            .collect();
        if ingredients.is_empty() {
            return Err(CoreError::validation(
                "ingredients",
                "at least one ingredient is required",
            ));
        }
        if ingredients
            .iter()
            .any(|ingredient| ingredient.chars().count() > INGREDIENT_MAX_CHARS)
        {
            return Err(CoreError::validation(
                "ingredients",
                format!("each ingredient must not exceed {} characters", INGREDIENT_MAX_CHARS),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            brand: optional_text("brand", brand, TEXT_MAX_CHARS)?,
            barcode: optional_text("barcode", barcode, TEXT_MAX_CHARS)?,
            product_type: optional_text("type", product_type, TEXT_MAX_CHARS)?,
            category: optional_text("category", category, TEXT_MAX_CHARS)?,
            ingredients,
        })
    }
}

fn optional_text(
    field: &str,
    value: Option<&str>,
    max_chars: usize,
) -> Result<Option<String>, CoreError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if value.chars().count() > max_chars {
        return Err(CoreError::validation(
            field,
            format!("must not exceed {} characters", max_chars),
        ));
    }

    Ok(Some(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn blank_ingredients_are_dropped_and_names_trimmed() {
        let fields = ProductFields::validate(
            " Crème hydratante ",
            Some(" Marque "),
            Some(""),
            None,
            Some("Soin visage"),
            &ingredients(&[" Aqua", "", "  ", "Glycerin "]),
        )
        .unwrap();

        assert_eq!(fields.name, "Crème hydratante");
        assert_eq!(fields.brand.as_deref(), Some("Marque"));
        assert_eq!(fields.barcode, None);
        assert_eq!(fields.ingredients, vec!["Aqua", "Glycerin"]);
    }

    #[test]
    fn name_and_one_ingredient_are_required() {
        let err = ProductFields::validate("  ", None, None, None, None, &ingredients(&["Aqua"]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "name"));

        let err = ProductFields::validate("Crème", None, None, None, None, &ingredients(&[" "]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "ingredients"));
    }

    #[test]
    fn long_optional_text_is_rejected() {
        let long = "x".repeat(101);
        let err = ProductFields::validate(
            "Crème",
            None,
            None,
            Some(&long),
            None,
            &ingredients(&["Aqua"]),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "type"));
    }
}
