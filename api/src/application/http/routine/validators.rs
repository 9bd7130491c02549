use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RoutineValidator {
    #[validate(length(min = 2, max = 200, message = "title must be 2 to 200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "step must be 1 to 100 characters"))]
    pub step: String,

    #[validate(length(min = 1, max = 50, message = "routine_type must be 1 to 50 characters"))]
    pub routine_type: String,

    /// Position within the routine; 0 when omitted
    #[serde(default)]
    #[validate(range(min = 0, message = "order_index must not be negative"))]
    pub order_index: Option<i32>,

    #[serde(default)]
    pub recommended_for: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RoutineValidator {
        RoutineValidator {
            title: "Nettoyage doux".to_string(),
            description: None,
            step: "1".to_string(),
            routine_type: "matin".to_string(),
            order_index: Some(0),
            recommended_for: vec!["peau sèche".to_string()],
        }
    }

    #[test]
    fn accepts_a_complete_step() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn position_and_profiles_are_optional() {
        let payload: RoutineValidator = serde_json::from_value(serde_json::json!({
            "title": "Sérum",
            "step": "2",
            "routine_type": "soir"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert!(payload.order_index.is_none());
        assert!(payload.recommended_for.is_empty());
    }

    #[test]
    fn rejects_negative_position_and_empty_type() {
        let mut payload = payload();
        payload.order_index = Some(-1);
        payload.routine_type = String::new();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("order_index"));
        assert!(fields.contains_key("routine_type"));
    }
}
