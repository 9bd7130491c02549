use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRoutinesFilter {
    /// Exact routine type, e.g. `matin` or `soir`.
    pub routine_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateRoutineInput {
    pub title: String,
    pub description: Option<String>,
    pub step: String,
    pub routine_type: String,
    pub order_index: Option<i32>,
    pub recommended_for: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateRoutineInput {
    pub routine_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub step: String,
    pub routine_type: String,
    pub order_index: Option<i32>,
    pub recommended_for: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineFields {
    pub title: String,
    pub description: Option<String>,
    pub step: String,
    pub routine_type: String,
    pub order_index: i32,
    pub recommended_for: Vec<String>,
}

const TITLE_MIN_CHARS: usize = 2;
const TITLE_MAX_CHARS: usize = 200;
const DESCRIPTION_MAX_CHARS: usize = 1000;
const STEP_MAX_CHARS: usize = 100;
const ROUTINE_TYPE_MAX_CHARS: usize = 50;
const RECOMMENDED_FOR_MAX_CHARS: usize = 100;

impl RoutineFields {
    pub fn validate(
        title: &str,
        description: Option<&str>,
        step: &str,
        routine_type: &str,
        order_index: Option<i32>,
        recommended_for: &[String],
    ) -> Result<Self, CoreError> {
        let title = required_text("title", title, TITLE_MIN_CHARS, TITLE_MAX_CHARS)?;
        let step = required_text("step", step, 1, STEP_MAX_CHARS)?;
        let routine_type =
            required_text("routine_type", routine_type, 1, ROUTINE_TYPE_MAX_CHARS)?;

        let description = match description.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) if value.chars().count() > DESCRIPTION_MAX_CHARS => {
                return Err(CoreError::validation(
                    "description",
                    format!("must not exceed {} characters", DESCRIPTION_MAX_CHARS),
                ));
            }
            value => value.map(str::to_string),
        };

        let order_index = order_index.unwrap_or(0);
        if order_index < 0 {
            return Err(CoreError::validation("order_index", "must not be negative"));
        }

        let recommended_for: Vec<String> = recommended_for
            .iter()
            .map(|profile| profile.trim())
            .filter(|profile| !profile.is_empty())
            .map(str::to_string)
            .collect();
        if recommended_for
            .iter()
            .any(|profile| profile.chars().count() > RECOMMENDED_FOR_MAX_CHARS)
        {
            return Err(CoreError::validation(
                "recommended_for",
                format!("each entry must not exceed {} characters", RECOMMENDED_FOR_MAX_CHARS),
            ));
        }

        Ok(Self {
            title,
            description,
            step,
            routine_type,
            order_index,
            recommended_for,
        })
    }
}

fn required_text(
    field: &str,
    value: &str,
    min_chars: usize,
    max_chars: usize,
) -> Result<String, CoreError> {
    let value = value.trim();
    let len = value.chars().count();

    if len < min_chars {
        return Err(CoreError::validation(
            field,
            format!("must contain at least {} characters", min_chars),
        ));
    }
    if len > max_chars {
        return Err(CoreError::validation(
            field,
            format!("must not exceed {} characters", max_chars),
        ));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(title: &str, step: &str, routine_type: &str) -> Result<RoutineFields, CoreError> {
        RoutineFields::validate(title, None, step, routine_type, None, &[])
    }

    fn field_of(err: CoreError) -> String {
        match err {
            CoreError::Validation { field, .. } => field,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn order_defaults_to_zero_and_profiles_are_trimmed() {
        let fields = RoutineFields::validate(
            " Nettoyage doux ",
            Some("  "),
            " 1 ",
            "matin",
            None,
            &[" peau sèche".to_string(), "".to_string(), "peau sensible ".to_string()],
        )
        .unwrap();

        assert_eq!(fields.title, "Nettoyage doux");
        assert_eq!(fields.description, None);
        assert_eq!(fields.step, "1");
        assert_eq!(fields.order_index, 0);
        assert_eq!(fields.recommended_for, vec!["peau sèche", "peau sensible"]);
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        assert_eq!(field_of(validate("N", "1", "matin").unwrap_err()), "title");
        assert_eq!(field_of(validate("Nettoyage", " ", "matin").unwrap_err()), "step");
        assert_eq!(field_of(validate("Nettoyage", "1", "").unwrap_err()), "routine_type");

        let long_type = "x".repeat(51);
        assert_eq!(
            field_of(validate("Nettoyage", "1", &long_type).unwrap_err()),
            "routine_type"
        );
    }

    #[test]
    fn negative_order_and_long_profiles_are_rejected() {
        let err = RoutineFields::validate("Nettoyage", None, "1", "soir", Some(-1), &[])
            .unwrap_err();
        assert_eq!(field_of(err), "order_index");

        let err =
            RoutineFields::validate("Nettoyage", None, "1", "soir", Some(2), &["x".repeat(101)])
                .unwrap_err();
        assert_eq!(field_of(err), "recommended_for");
    }
}
