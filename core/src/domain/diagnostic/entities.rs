use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

/// Questionnaire family; the serialized names are the stored `type` column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DiagnosticKind {
    #[serde(rename = "peau")]
    Skin,
    #[serde(rename = "cheveux")]
    Hair,
    #[serde(rename = "beauty")]
    Beauty,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Skin => "peau",
            DiagnosticKind::Hair => "cheveux",
            DiagnosticKind::Beauty => "beauty",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts both the stored French names and the English route segments.
impl FromStr for DiagnosticKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "peau" | "skin" => Ok(DiagnosticKind::Skin),
            "cheveux" | "hair" => Ok(DiagnosticKind::Hair),
            "beauty" | "beaute" | "beauté" => Ok(DiagnosticKind::Beauty),
            _ => Err(CoreError::validation(
                "kind",
                "expected one of peau, cheveux, beauty",
            )),
        }
    }
}

/// A stored questionnaire submission.
///
/// `answers` and `result` are kept as raw JSON: rows written by older
/// clients do not always follow the current result shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Diagnostic {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: DiagnosticKind,
    #[schema(value_type = Object)]
    pub answers: serde_json::Value,
    #[schema(value_type = Object)]
    pub result: serde_json::Value,
    /// The result is the built-in default because the model reply was unusable.
    pub used_fallback: bool,
    pub created_at: DateTime<Utc>,
}

impl Diagnostic {
    pub fn new(
        user_id: Uuid,
        kind: DiagnosticKind,
        answers: serde_json::Value,
        result: serde_json::Value,
        used_fallback: bool,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            user_id,
            kind,
            answers,
            result,
            used_fallback,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum DiagnosticResult {
    Skin(SkinResult),
    Hair(HairResult),
    Beauty(BeautyResult),
}

impl DiagnosticResult {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            DiagnosticResult::Skin(_) => DiagnosticKind::Skin,
            DiagnosticResult::Hair(_) => DiagnosticKind::Hair,
            DiagnosticResult::Beauty(_) => DiagnosticKind::Beauty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkinResult {
    pub type_peau: String,
    pub etat_peau: String,
    pub objectifs: Vec<String>,
    pub sensibilites: Vec<String>,
    pub niveau_sensibilite: String,
    pub budget: String,
    pub reaction_produits: String,
    #[serde(default)]
    pub recommandations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Routine {
    #[serde(default)]
    pub morning: Vec<String>,
    #[serde(default)]
    pub evening: Vec<String>,
    #[serde(default)]
    pub weekly: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HairResult {
    pub hair_type: HairType,
    #[serde(default)]
    pub current_condition: Vec<String>,
    pub habits: HairHabits,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub sensitivities: Vec<String>,
    pub recommendations: HairRecommendations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HairType {
    pub thickness: String,
    pub texture: String,
    pub scalp: String,
    pub global_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HairHabits {
    pub washing_frequency: String,
    #[serde(default)]
    pub heat_tools: Vec<String>,
    #[serde(default)]
    pub chemical_treatments: Vec<String>,
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HairRecommendations {
    #[serde(default)]
    pub ingredients_to_use: Vec<String>,
    #[serde(default)]
    pub ingredients_to_avoid: Vec<String>,
    #[serde(default)]
    pub routine: Routine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BeautyResult {
    pub beauty_profile: BeautyProfile,
    pub profiles: Vec<BeautyProfileTemplate>,
}

/// The user's answers echoed back in snake case, plus the category chosen by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BeautyProfile {
    pub sleep: String,
    pub hydration: String,
    pub stress: String,
    pub sun_exposure: String,
    pub environment: String,
    pub routine_frequency: String,
    pub routine_steps: String,
    pub makeup_removal: String,
    pub style: String,
    pub ingredients_preference: String,
    #[serde(rename = "SPF_usage")]
    pub spf_usage: String,
    pub goals: Vec<String>,
    pub knowledge_level: String,
    pub actives_comfort: String,
    pub profile_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BeautyProfileTemplate {
    pub profile: String,
    pub description: String,
    pub recommended_ingredients: Vec<String>,
    pub ingredients_to_avoid: Vec<String>,
    pub routine: Routine,
}
