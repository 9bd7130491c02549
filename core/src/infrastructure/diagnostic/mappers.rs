use chrono::Utc;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnostic::entities::{Diagnostic, DiagnosticKind},
};
use crate::entity::diagnostics::Model as DiagnosticModel;

/// Key of the `result` object marking a built-in default result.
const FALLBACK_KEY: &str = "used_fallback";

/// The `diagnostics` table has no column for the fallback flag; it travels
/// inside the stored `result` object and only when set.
pub fn stored_result(mut result: Value, used_fallback: bool) -> Value {
    if used_fallback && let Value::Object(fields) = &mut result {
        fields.insert(FALLBACK_KEY.to_string(), Value::Bool(true));
    }
    result
}

fn split_result(result: Option<Value>) -> (Value, bool) {
    let mut result = result.unwrap_or(Value::Null);
    let used_fallback = match &mut result {
        Value::Object(fields) => fields
            .remove(FALLBACK_KEY)
            .and_then(|flag| flag.as_bool())
            .unwrap_or(false),
        _ => false,
    };
    (result, used_fallback)
}

/// Fails only when the stored `type` is not a known questionnaire.
impl TryFrom<DiagnosticModel> for Diagnostic {
    type Error = CoreError;

    fn try_from(model: DiagnosticModel) -> Result<Self, Self::Error> {
        let kind = model.kind.parse::<DiagnosticKind>()?;
        let (result, used_fallback) = split_result(model.result);

        Ok(Diagnostic {
            id: model.id,
            user_id: model.user_id,
            kind,
            answers: model.answers,
            result,
            used_fallback,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;
    use uuid::Uuid;

    fn model(kind: &str, result: Option<Value>) -> DiagnosticModel {
        DiagnosticModel {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: kind.to_string(),
            answers: json!({ "q1": "A" }),
            result,
            created_at: Utc::now().with_timezone(&FixedOffset::east_opt(7200).unwrap()),
        }
    }

    #[test]
    fn legacy_rows_without_result_map_to_null() {
        let diagnostic = Diagnostic::try_from(model("cheveux", None)).unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::Hair);
        assert_eq!(diagnostic.result, Value::Null);
        assert!(!diagnostic.used_fallback);
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(Diagnostic::try_from(model("ongles", None)).is_err());
    }

    #[test]
    fn fallback_flag_is_kept_inside_the_stored_result() {
        let result = json!({ "beauty_profile": "Débutante" });

        let stored = stored_result(result.clone(), true);
        assert_eq!(stored["used_fallback"], true);
        assert_eq!(stored_result(result.clone(), false), result);

        let diagnostic = Diagnostic::try_from(model("beauty", Some(stored))).unwrap();
        assert!(diagnostic.used_fallback);
        assert_eq!(diagnostic.result, result);
    }

    #[test]
    fn rows_written_by_the_app_read_as_model_results() {
        let result = json!({ "type_peau": "sèche" });
        let diagnostic = Diagnostic::try_from(model("peau", Some(result.clone()))).unwrap();
        assert!(!diagnostic.used_fallback);
        assert_eq!(diagnostic.result, result);
    }
}
