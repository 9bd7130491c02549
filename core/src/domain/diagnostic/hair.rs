use crate::domain::diagnostic::{
    entities::{HairHabits, HairRecommendations, HairResult, HairType, Routine},
    response::extract_json_object,
    value_objects::HairAnswers,
};

pub const HAIR_SYSTEM_PROMPT: &str = "Tu es un expert en soins capillaires. Analyse les réponses du questionnaire et génère des recommandations personnalisées. Réponds UNIQUEMENT avec du JSON valide, sans markdown ni formatage supplémentaire.";

pub const HAIR_TEMPERATURE: f32 = 0.7;

const RESULT_SHAPE: &str = r#"{
  "hair_type": {
    "thickness": "",
    "texture": "",
    "scalp": "",
    "global_type": ""
  },
  "current_condition": [],
  "habits": {
    "washing_frequency": "",
    "heat_tools": [],
    "chemical_treatments": [],
    "environment": ""
  },
  "goals": [],
  "sensitivities": [],
  "recommendations": {
    "ingredients_to_use": [],
    "ingredients_to_avoid": [],
    "routine": {
      "morning": [],
      "evening": [],
      "weekly": []
    }
  }
}"#;

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "Aucun".to_string()
    } else {
        values.join(", ")
    }
}

pub fn build_hair_prompt(answers: &HairAnswers) -> String {
    let allergy_detail = answers
        .q10_other
        .as_deref()
        .filter(|other| !other.is_empty())
        .map(|other| format!(" ({})", other))
        .unwrap_or_default();

    format!(
        "
Voici les réponses d'un utilisateur au diagnostic cheveux:

1. Épaisseur: {q1}
2. Texture: {q2}
3. Cuir chevelu: {q3}
4. État des cheveux: {q4}
5. Problèmes observés: {q5}
6. Fréquence de lavage: {q6}
7. Outils/traitements utilisés: {q7}
8. Environnement: {q8}
9. Objectifs: {q9}
10. Allergies: {q10}{allergy_detail}

Analyse ce profil et génère une réponse JSON strictement formatée (pas de markdown, juste du JSON pur) avec cette structure exacte:

{shape}

Remplis chaque champ avec des recommandations personnalisées basées sur le profil. Les tableaux doivent contenir des chaînes de caractères descriptives en français. Pour global_type, choisis parmi: \"cheveux gras\", \"cheveux secs\", \"cheveux normaux\", \"cheveux sensibles\", \"cheveux mixtes\".
",
        q1 = answers.q1,
        q2 = answers.q2,
        q3 = answers.q3,
        q4 = answers.q4,
        q5 = join_or_none(&answers.q5),
        q6 = answers.q6,
        q7 = join_or_none(&answers.q7),
        q8 = answers.q8,
        q9 = answers.q9.join(", "),
        q10 = answers.q10,
        allergy_detail = allergy_detail,
        shape = RESULT_SHAPE,
    )
}

/// Parses the model reply into a hair profile, or explains why it could not.
pub fn parse_hair_response(content: &str) -> Result<HairResult, String> {
    serde_json::from_str(&extract_json_object(content)).map_err(|e| e.to_string())
}

/// Neutral profile returned when the model reply cannot be used.
pub fn hair_fallback(answers: &HairAnswers) -> HairResult {
    let strings = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();

    HairResult {
        hair_type: HairType {
            thickness: answers.q1.clone(),
            texture: answers.q2.clone(),
            scalp: answers.q3.clone(),
            global_type: "cheveux normaux".to_string(),
        },
        current_condition: answers.q5.clone(),
        habits: HairHabits {
            washing_frequency: answers.q6.clone(),
            heat_tools: answers.q7.clone(),
            chemical_treatments: Vec::new(),
            environment: answers.q8.clone(),
        },
        goals: answers.q9.clone(),
        sensitivities: answers.q10_other.iter().cloned().collect(),
        recommendations: HairRecommendations {
            ingredients_to_use: strings(&["glycérine", "aloe vera", "protéines de blé"]),
            ingredients_to_avoid: strings(&["sulfates agressifs", "alcool dénaturé"]),
            routine: Routine {
                morning: strings(&["brumiser un soin sans rinçage léger"]),
                evening: strings(&["démêler délicatement avant le coucher"]),
                weekly: strings(&["shampooing doux", "masque nourrissant"]),
            },
        },
    }
}
