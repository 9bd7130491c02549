use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, diagnostic::entities::DiagnosticKind,
};

const SCALE_A_TO_E: &[&str] = &["A", "B", "C", "D", "E"];
const SCALE_A_TO_D: &[&str] = &["A", "B", "C", "D"];
const SCALE_A_TO_C: &[&str] = &["A", "B", "C"];

/// Skin questionnaire; every answer is a letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkinAnswers {
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
    pub q5: String,
    pub q6: Vec<String>,
    pub q7: String,
    #[serde(default)]
    pub q8: Vec<String>,
    #[serde(default)]
    pub q8_other: Option<String>,
    pub q9: String,
}

impl SkinAnswers {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("q1", &self.q1),
            ("q2", &self.q2),
            ("q3", &self.q3),
            ("q4", &self.q4),
            ("q5", &self.q5),
        ] {
            single_choice(field, value, SCALE_A_TO_E)?;
        }
        single_choice("q7", &self.q7, SCALE_A_TO_C)?;
        single_choice("q9", &self.q9, SCALE_A_TO_C)?;

        if self.q6.is_empty() {
            return Err(CoreError::validation("q6", "select at least one goal"));
        }
        multiple_choice("q6", &self.q6, SCALE_A_TO_E)?;
        multiple_choice("q8", &self.q8, SCALE_A_TO_D)?;

        Ok(())
    }
}

/// Hair questionnaire; answers are free labels chosen in the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HairAnswers {
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
    #[serde(default)]
    pub q5: Vec<String>,
    pub q6: String,
    #[serde(default)]
    pub q7: Vec<String>,
    pub q8: String,
    pub q9: Vec<String>,
    pub q10: String,
    #[serde(default)]
    pub q10_other: Option<String>,
}

impl HairAnswers {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("q1", &self.q1),
            ("q2", &self.q2),
            ("q3", &self.q3),
            ("q4", &self.q4),
            ("q6", &self.q6),
            ("q8", &self.q8),
            ("q10", &self.q10),
        ] {
            required(field, value)?;
        }

        if self.q9.iter().all(|goal| goal.trim().is_empty()) {
            return Err(CoreError::validation("q9", "select at least one goal"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeautyAnswers {
    pub sleep: String,
    pub hydration: String,
    pub stress: String,
    pub sun_exposure: String,
    pub environment: String,
    pub routine_frequency: String,
    pub routine_steps: String,
    pub makeup_removal: String,
    pub products_style: String,
    pub spf_usage: String,
    pub goals: Vec<String>,
    pub knowledge_level: String,
    pub actives_comfort: String,
}

impl BeautyAnswers {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("sleep", &self.sleep),
            ("hydration", &self.hydration),
            ("stress", &self.stress),
            ("sunExposure", &self.sun_exposure),
            ("environment", &self.environment),
            ("routineFrequency", &self.routine_frequency),
            ("routineSteps", &self.routine_steps),
            ("makeupRemoval", &self.makeup_removal),
            ("productsStyle", &self.products_style),
            ("spfUsage", &self.spf_usage),
            ("knowledgeLevel", &self.knowledge_level),
            ("activesComfort", &self.actives_comfort),
        ] {
            required(field, value)?;
        }

        if self.goals.iter().all(|goal| goal.trim().is_empty()) {
            return Err(CoreError::validation("goals", "select at least one goal"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticAnswers {
    Skin(SkinAnswers),
    Hair(HairAnswers),
    Beauty(BeautyAnswers),
}

impl DiagnosticAnswers {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            DiagnosticAnswers::Skin(_) => DiagnosticKind::Skin,
            DiagnosticAnswers::Hair(_) => DiagnosticKind::Hair,
            DiagnosticAnswers::Beauty(_) => DiagnosticKind::Beauty,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            DiagnosticAnswers::Skin(answers) => answers.validate(),
            DiagnosticAnswers::Hair(answers) => answers.validate(),
            DiagnosticAnswers::Beauty(answers) => answers.validate(),
        }
    }

    /// The answers as the client submitted them, for storage.
    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        let value = match self {
            DiagnosticAnswers::Skin(answers) => serde_json::to_value(answers),
            DiagnosticAnswers::Hair(answers) => serde_json::to_value(answers),
            DiagnosticAnswers::Beauty(answers) => serde_json::to_value(answers),
        };

        value.map_err(|e| {
            tracing::error!("Failed to serialize diagnostic answers: {}", e);
            CoreError::InternalServerError
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDiagnosticsFilter {
    pub kind: Option<DiagnosticKind>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

fn required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "an answer is required"));
    }
    Ok(())
}

fn single_choice(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    required(field, value)?;
    if !allowed.contains(&value) {
        return Err(CoreError::validation(
            field,
            format!("expected one of {}", allowed.join(", ")),
        ));
    }
    Ok(())
}

fn multiple_choice(field: &str, values: &[String], allowed: &[&str]) -> Result<(), CoreError> {
    match values.iter().find(|v| !allowed.contains(&v.as_str())) {
        Some(invalid) => Err(CoreError::validation(
            field,
            format!(
                "unexpected answer `{}`, expected any of {}",
                invalid,
                allowed.join(", ")
            ),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn skin_answers() -> SkinAnswers {
        SkinAnswers {
            q1: "A".to_string(),
            q2: "A".to_string(),
            q3: "B".to_string(),
            q4: "A".to_string(),
            q5: "C".to_string(),
            q6: vec!["A".to_string(), "D".to_string()],
            q7: "B".to_string(),
            q8: vec!["A".to_string()],
            q8_other: Some("lanoline".to_string()),
            q9: "B".to_string(),
        }
    }

    pub(crate) fn hair_answers() -> HairAnswers {
        HairAnswers {
            q1: "Fins".to_string(),
            q2: "Bouclés".to_string(),
            q3: "Gras".to_string(),
            q4: "Abîmés".to_string(),
            q5: vec!["Frisottis".to_string(), "Pointes fourchues".to_string()],
            q6: "Tous les 2-3 jours".to_string(),
            q7: vec![],
            q8: "Urbain / pollué".to_string(),
            q9: vec!["Hydratation".to_string()],
            q10: "Oui".to_string(),
            q10_other: Some("sulfates".to_string()),
        }
    }

    pub(crate) fn beauty_answers() -> BeautyAnswers {
        BeautyAnswers {
            sleep: "Moins de 6h".to_string(),
            hydration: "Moins d'1L".to_string(),
            stress: "Élevé".to_string(),
            sun_exposure: "Forte".to_string(),
            environment: "Ville".to_string(),
            routine_frequency: "Tous les jours".to_string(),
            routine_steps: "3-4 étapes".to_string(),
            makeup_removal: "Toujours".to_string(),
            products_style: "Naturels".to_string(),
            spf_usage: "Rarement".to_string(),
            goals: vec![
                "Peau plus lumineuse".to_string(),
                "Ralentir le vieillissement".to_string(),
            ],
            knowledge_level: "Débutante".to_string(),
            actives_comfort: "Un peu".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::*, *};

    #[test]
    fn valid_answers_pass() {
        assert!(skin_answers().validate().is_ok());
        assert!(hair_answers().validate().is_ok());
        assert!(beauty_answers().validate().is_ok());
    }

    #[test]
    fn skin_rejects_unknown_letters() {
        let mut answers = skin_answers();
        answers.q2 = "F".to_string();
        let err = answers.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "q2"));

        let mut answers = skin_answers();
        answers.q8 = vec!["E".to_string()];
        let err = answers.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "q8"));
    }

    #[test]
    fn skin_product_reaction_uses_the_five_letter_scale() {
        let mut answers = skin_answers();
        answers.q5 = "E".to_string();
        assert!(answers.validate().is_ok());

        answers.q9 = "D".to_string();
        let err = answers.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "q9"));
    }

    #[test]
    fn skin_requires_a_goal() {
        let mut answers = skin_answers();
        answers.q6.clear();
        let err = answers.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "q6"));
    }

    #[test]
    fn hair_and_beauty_require_answers() {
        let mut hair = hair_answers();
        hair.q3 = "  ".to_string();
        assert!(matches!(
            hair.validate(),
            Err(CoreError::Validation { ref field, .. }) if field == "q3"
        ));

        let mut beauty = beauty_answers();
        beauty.goals = vec![];
        assert!(matches!(
            beauty.validate(),
            Err(CoreError::Validation { ref field, .. }) if field == "goals"
        ));
    }

    #[test]
    fn beauty_answers_use_camel_case_keys() {
        let json = serde_json::to_value(beauty_answers()).unwrap();
        assert_eq!(json["sunExposure"], "Forte");
        assert_eq!(json["spfUsage"], "Rarement");
    }
}
