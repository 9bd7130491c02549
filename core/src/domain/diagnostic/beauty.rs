use serde::Deserialize;

use crate::domain::diagnostic::{
    entities::{BeautyProfile, BeautyProfileTemplate, BeautyResult, Routine},
    response::extract_json_object,
    value_objects::BeautyAnswers,
};

pub const BEAUTY_SYSTEM_PROMPT: &str =
    "Tu es un expert en beauté et skincare. Tu réponds uniquement en JSON valide, sans markdown.";

pub const MAX_SELECTED_PROFILES: usize = 3;

pub const FALLBACK_CATEGORY: &str = "Débutante";
pub const FALLBACK_PROFILE: &str = "hydratation-intense";

struct ProfileDef {
    key: &'static str,
    description: &'static str,
    recommended: &'static [&'static str],
    avoid: &'static [&'static str],
    morning: &'static [&'static str],
    evening: &'static [&'static str],
    weekly: &'static [&'static str],
}

const PROFILES: [ProfileDef; 10] = [
    ProfileDef {
        key: "anti-age",
        description: "Réduit l'apparence des rides, améliore la fermeté et la texture de la peau.",
        recommended: &[
            "rétinol",
            "peptides",
            "bakuchiol",
            "vitamine C",
            "niacinamide",
            "acide hyaluronique",
            "acides aminés",
        ],
        avoid: &["alcool dénaturé", "parfum", "gommages mécaniques agressifs"],
        morning: &["nettoyant doux", "vitamine C", "crème hydratante", "SPF 50"],
        evening: &["double nettoyage", "rétinol (progressif)", "crème nourrissante"],
        weekly: &["masque hydratant", "AHA doux"],
    },
    ProfileDef {
        key: "peau-sensible",
        description: "Apaise la peau et réduit les rougeurs et irritations.",
        recommended: &[
            "panthénol",
            "bisabolol",
            "centella asiatica",
            "aloe vera",
            "avoine colloïdale",
            "céramides",
        ],
        avoid: &["alcool", "parfum", "huiles essentielles", "AHA/BHA concentrés"],
        morning: &["nettoyant ultra doux", "sérum apaisant", "crème barrière", "SPF minéral"],
        evening: &["nettoyant doux", "sérum céramides", "crème riche sans parfum"],
        weekly: &["masque apaisant", "compresses d'avoine"],
    },
    ProfileDef {
        key: "anti-secheresse",
        description: "Répare et nourrit les peaux sèches ou déshydratées.",
        recommended: &[
            "céramides",
            "acide hyaluronique",
            "squalane",
            "huile de jojoba",
            "glycérine",
            "beurre de karité",
        ],
        avoid: &["alcool dénaturé", "gels nettoyants agressifs"],
        morning: &["nettoyant crème", "sérum HA", "crème riche", "SPF 30+"],
        evening: &["double nettoyage doux", "huile nourrissante", "crème épaisse"],
        weekly: &["bain d'hydratation", "masque nourrissant"],
    },
    ProfileDef {
        key: "hydratation-intense",
        description: "Redonne souplesse et hydratation à une peau déshydratée.",
        recommended: &[
            "acide hyaluronique",
            "panthénol",
            "glycérine",
            "aloe vera",
            "acides aminés",
        ],
        avoid: &["alcool", "acides exfoliants trop fréquents"],
        morning: &["brume hydratante", "sérum HA", "crème légère", "SPF"],
        evening: &["nettoyant hydratant", "sérum panthénol", "crème réparatrice"],
        weekly: &["masque hydratant", "sleeping mask"],
    },
    ProfileDef {
        key: "eclat",
        description: "Illumine le teint, améliore l'uniformité et donne du glow.",
        recommended: &[
            "vitamine C",
            "niacinamide",
            "acide glycolique",
            "acide lactique",
            "acides de fruits AHA",
            "PHA",
        ],
        avoid: &["huiles minérales", "soins occlusifs lourds"],
        morning: &["nettoyant doux", "vitamine C", "crème légère", "SPF"],
        evening: &["nettoyant", "AHA léger 2–3x/semaine", "crème hydratante"],
        weekly: &["masque illuminateur"],
    },
    ProfileDef {
        key: "anti-acne",
        description: "Purifie la peau, réduit les imperfections et régule le sébum.",
        recommended: &[
            "acide salicylique",
            "niacinamide",
            "benzoyl peroxide",
            "zinc PCA",
            "acide azélaïque",
            "probiotiques",
        ],
        avoid: &["huiles lourdes", "beurres riches", "silicones occlusifs"],
        morning: &["nettoyant purifiant", "niacinamide", "gel hydratant", "SPF matifiant"],
        evening: &["double nettoyage", "acide salicylique", "azélaïque"],
        weekly: &["masque purifiant", "gommage enzymatique"],
    },
    ProfileDef {
        key: "anti-taches",
        description: "Réduit l'hyperpigmentation et harmonise le teint.",
        recommended: &[
            "vitamine C",
            "acide azélaïque",
            "niacinamide",
            "AHA",
            "arbutine",
            "retinol",
        ],
        avoid: &["soleil sans SPF", "gommages agressifs"],
        morning: &["vitamine C", "niacinamide", "SPF 50"],
        evening: &["nettoyant", "retinol ou azélaïque", "crème réparatrice"],
        weekly: &["peeling doux AHA"],
    },
    ProfileDef {
        key: "texture-lissee",
        description: "Lisse la texture, resserre les pores et améliore la douceur.",
        recommended: &["niacinamide", "acide salicylique", "AHA", "PHA", "rétinol"],
        avoid: &["crèmes trop grasses", "huiles lourdes"],
        morning: &["nettoyant doux", "niacinamide", "SPF"],
        evening: &["acide salicylique", "rétinol", "gel hydratant"],
        weekly: &["exfoliation chimique douce"],
    },
    ProfileDef {
        key: "apaisement",
        description: "Réduit rougeurs, inconfort et irritations.",
        recommended: &["centella", "panthénol", "bisabolol", "céramides", "aloe vera"],
        avoid: &["acides exfoliants", "rétinol", "parfum", "huiles essentielles"],
        morning: &["nettoyant doux", "sérum apaisant centella", "crème barrière", "SPF"],
        evening: &["nettoyage doux", "panthénol", "crème réparatrice"],
        weekly: &["masque apaisant"],
    },
    ProfileDef {
        key: "uniformite-teint",
        description: "Lutte contre les zones ternes et irrégulières.",
        recommended: &["niacinamide", "vitamine C", "PHA", "AHA", "arbutine"],
        avoid: &["gommages physiques abrasifs"],
        morning: &["vitamine C", "hydratant", "SPF"],
        evening: &["PHA ou AHA", "crème réparatrice"],
        weekly: &["masque éclat"],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl ProfileDef {
    fn to_template(&self) -> BeautyProfileTemplate {
        BeautyProfileTemplate {
            profile: self.key.to_string(),
            description: self.description.to_string(),
            recommended_ingredients: owned(self.recommended),
            ingredients_to_avoid: owned(self.avoid),
            routine: Routine {
                morning: owned(self.morning),
                evening: owned(self.evening),
                weekly: owned(self.weekly),
            },
        }
    }
}

pub fn profile_keys() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|profile| profile.key)
}

pub fn find_profile(key: &str) -> Option<BeautyProfileTemplate> {
    PROFILES
        .iter()
        .find(|profile| profile.key == key)
        .map(ProfileDef::to_template)
}

/// What the model is asked to return.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BeautySelection {
    pub profile_category: String,
    pub selected_profiles: Vec<String>,
}

impl BeautySelection {
    pub fn fallback() -> Self {
        Self {
            profile_category: FALLBACK_CATEGORY.to_string(),
            selected_profiles: vec![FALLBACK_PROFILE.to_string()],
        }
    }
}

pub fn build_beauty_prompt(answers: &BeautyAnswers) -> String {
    format!(
        "Tu es un expert en beauté et skincare. Analyse ce profil beauté et détermine quels profils beauté correspondent le mieux.

Réponses du questionnaire :
- Sommeil : {sleep}
- Hydratation : {hydration}
- Stress : {stress}
- Exposition soleil : {sun}
- Environnement : {environment}
- Fréquence routine : {frequency}
- Étapes routine : {steps}
- Démaquillage : {makeup}
- Style produits : {style}
- Protection solaire : {spf}
- Objectifs : {goals}
- Niveau connaissance : {knowledge}
- Aisance actifs : {actives}

Règles de sélection :
- \"Ralentir le vieillissement\" → anti-age
- \"Routine minimaliste\" → routine simple (moins d'étapes)
- \"Peau plus lumineuse\" ou \"joli teint naturel\" → eclat
- Stress élevé ou sommeil < 6h → apaisement
- Hydratation faible → hydratation-intense ou anti-secheresse
- Exposition soleil élevée sans protection → anti-taches + uniformite-teint
- Débutant + routine 0-2 étapes → profils simples (minimaliste)
- Avancé + 5+ étapes → profils complexes possibles

Détermine 1 à 3 profils les plus adaptés parmi : {keys}.

Détermine aussi une catégorie de profil parmi : Minimaliste, Débordée, Avancée/passionnée, Sensible/prudente, Glow addict, Anti-âge experte, Naturelle/green, Peu régulière/inconstante, Stressée/fatiguée, Exposée (soleil/pollution).

Retourne un JSON avec cette structure exacte (sans markdown) :
{{
  \"profile_category\": \"catégorie choisie\",
  \"selected_profiles\": [\"profil1\", \"profil2\"]
}}",
        sleep = answers.sleep,
        hydration = answers.hydration,
        stress = answers.stress,
        sun = answers.sun_exposure,
        environment = answers.environment,
        frequency = answers.routine_frequency,
        steps = answers.routine_steps,
        makeup = answers.makeup_removal,
        style = answers.products_style,
        spf = answers.spf_usage,
        goals = answers.goals.join(", "),
        knowledge = answers.knowledge_level,
        actives = answers.actives_comfort,
        keys = profile_keys().collect::<Vec<_>>().join(", "),
    )
}

pub fn parse_beauty_selection(content: &str) -> Result<BeautySelection, String> {
    serde_json::from_str(&extract_json_object(content)).map_err(|e| e.to_string())
}

/// Resolves up to three known profile keys and echoes the answers back.
///
/// Unknown and repeated keys are skipped; an empty `profiles` list means
/// nothing the model chose exists in the catalog.
pub fn assemble_beauty_result(answers: &BeautyAnswers, selection: &BeautySelection) -> BeautyResult {
    let mut profiles: Vec<BeautyProfileTemplate> = Vec::new();
    for key in &selection.selected_profiles {
        if profiles.len() == MAX_SELECTED_PROFILES {
            break;
        }
        if profiles.iter().any(|p| &p.profile == key) {
            continue;
        }
        if let Some(template) = find_profile(key) {
            profiles.push(template);
        }
    }

    BeautyResult {
        beauty_profile: BeautyProfile {
            sleep: answers.sleep.clone(),
            hydration: answers.hydration.clone(),
            stress: answers.stress.clone(),
            sun_exposure: answers.sun_exposure.clone(),
            environment: answers.environment.clone(),
            routine_frequency: answers.routine_frequency.clone(),
            routine_steps: answers.routine_steps.clone(),
            makeup_removal: answers.makeup_removal.clone(),
            style: answers.products_style.clone(),
            ingredients_preference: answers.products_style.clone(),
            spf_usage: answers.spf_usage.clone(),
            goals: answers.goals.clone(),
            knowledge_level: answers.knowledge_level.clone(),
            actives_comfort: answers.actives_comfort.clone(),
            profile_category: selection.profile_category.clone(),
        },
        profiles,
    }
}

pub fn beauty_fallback(answers: &BeautyAnswers) -> BeautyResult {
    assemble_beauty_result(answers, &BeautySelection::fallback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::value_objects::fixtures::beauty_answers;

    #[test]
    fn catalog_has_ten_distinct_profiles() {
        let keys: Vec<_> = profile_keys().collect();
        assert_eq!(keys.len(), 10);
        for key in &keys {
            assert_eq!(find_profile(key).unwrap().profile, *key);
        }
        assert!(find_profile("anti-rides").is_none());
    }

    #[test]
    fn prompt_lists_answers_and_profile_keys() {
        let prompt = build_beauty_prompt(&beauty_answers());

        assert!(prompt.contains("- Sommeil : Moins de 6h\n"));
        assert!(prompt.contains("- Objectifs : Peau plus lumineuse, Ralentir le vieillissement\n"));
        assert!(prompt.contains(
            "parmi : anti-age, peau-sensible, anti-secheresse, hydratation-intense, eclat, anti-acne, anti-taches, texture-lissee, apaisement, uniformite-teint."
        ));
        assert!(prompt.ends_with("\"selected_profiles\": [\"profil1\", \"profil2\"]\n}"));
    }

    #[test]
    fn parses_selection_surrounded_by_prose() {
        let reply = "Bien sûr ! {\"profile_category\": \"Glow addict\", \"selected_profiles\": [\"eclat\", \"anti-age\"]} Voilà.";
        let selection = parse_beauty_selection(reply).unwrap();

        assert_eq!(selection.profile_category, "Glow addict");
        assert_eq!(selection.selected_profiles, vec!["eclat", "anti-age"]);
    }

    #[test]
    fn assembles_at_most_three_known_profiles() {
        let selection = BeautySelection {
            profile_category: "Stressée/fatiguée".to_string(),
            selected_profiles: vec![
                "apaisement".to_string(),
                "inconnu".to_string(),
                "apaisement".to_string(),
                "eclat".to_string(),
                "anti-age".to_string(),
                "anti-taches".to_string(),
            ],
        };

        let result = assemble_beauty_result(&beauty_answers(), &selection);
        let keys: Vec<_> = result.profiles.iter().map(|p| p.profile.as_str()).collect();

        assert_eq!(keys, vec!["apaisement", "eclat", "anti-age"]);
        assert_eq!(result.beauty_profile.profile_category, "Stressée/fatiguée");
        assert_eq!(result.beauty_profile.style, "Naturels");
        assert_eq!(result.beauty_profile.ingredients_preference, "Naturels");
    }

    #[test]
    fn fallback_recommends_intense_hydration() {
        let result = beauty_fallback(&beauty_answers());

        assert_eq!(result.beauty_profile.profile_category, "Débutante");
        assert_eq!(result.profiles.len(), 1);
        assert_eq!(result.profiles[0].profile, "hydratation-intense");
        assert_eq!(result.profiles[0].routine.weekly, vec!["masque hydratant", "sleeping mask"]);
    }
}
