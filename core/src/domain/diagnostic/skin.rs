use crate::domain::diagnostic::{entities::SkinResult, value_objects::SkinAnswers};

const LETTERS: [&str; 5] = ["A", "B", "C", "D", "E"];

fn skin_type(letter: &str) -> &'static str {
    match letter {
        "A" => "sèche",
        "B" => "mixte",
        "C" => "grasse",
        "E" => "sensible",
        _ => "normale",
    }
}

fn skin_state(letter: &str) -> Option<&'static str> {
    match letter {
        "A" => Some("déshydratée"),
        "B" => Some("terne"),
        "C" => Some("irritée"),
        "D" => Some("acnéique"),
        "E" => Some("mature"),
        _ => None,
    }
}

fn goal(letter: &str) -> Option<&'static str> {
    match letter {
        "A" => Some("hydratation"),
        "B" => Some("éclat"),
        "C" => Some("anti-âge"),
        "D" => Some("anti-taches"),
        "E" => Some("anti-acné"),
        _ => None,
    }
}

fn sensitivity(letter: &str) -> Option<&'static str> {
    match letter {
        "A" => Some("parfum"),
        "B" => Some("huiles essentielles"),
        "C" => Some("alcool"),
        "D" => Some("aucune"),
        _ => None,
    }
}

/// Most frequent letter among q1..q3, ties resolved in `A..E` order.
fn dominant_letter(answers: &SkinAnswers) -> &'static str {
    let votes = [&answers.q1, &answers.q2, &answers.q3];

    let mut best = LETTERS[3];
    let mut best_count = 0;
    for letter in LETTERS {
        let count = votes.iter().filter(|vote| vote.as_str() == letter).count();
        if count > best_count {
            best = letter;
            best_count = count;
        }
    }
    best
}

/// Scores the skin questionnaire with fixed lookup tables.
pub fn score_skin(answers: &SkinAnswers) -> SkinResult {
    let type_peau = skin_type(dominant_letter(answers)).to_string();
    let etat_peau = skin_state(&answers.q4).unwrap_or_default().to_string();
    let objectifs: Vec<String> = answers
        .q6
        .iter()
        .filter_map(|letter| goal(letter))
        .map(str::to_string)
        .collect();

    let mut sensibilites: Vec<String> = answers
        .q8
        .iter()
        .filter_map(|letter| sensitivity(letter))
        .map(str::to_string)
        .collect();
    if let Some(other) = answers.q8_other.as_deref().map(str::trim)
        && !other.is_empty()
    {
        sensibilites.push(other.to_string());
    }

    let recommandations = recommendations(&type_peau, &etat_peau, &objectifs);

    SkinResult {
        type_peau,
        etat_peau,
        objectifs,
        sensibilites,
        niveau_sensibilite: answers.q9.clone(),
        budget: answers.q7.clone(),
        reaction_produits: answers.q5.clone(),
        recommandations,
    }
}

/// Care advice derived from the skin type, the skin state and the goals.
pub fn recommendations(type_peau: &str, etat_peau: &str, objectifs: &[String]) -> Vec<String> {
    let mut advice: Vec<&str> = Vec::new();

    match type_peau {
        "sèche" => advice.extend([
            "Utilisez des produits riches en actifs hydratants comme l'acide hyaluronique",
            "Privilégiez les textures crémeuses et nourrissantes",
            "Évitez les nettoyants trop agressifs",
        ]),
        "grasse" => advice.extend([
            "Optez pour des produits matifiants et purifiants",
            "Utilisez des textures légères et fluides",
            "Ne négligez pas l'hydratation avec des formules oil-free",
        ]),
        "mixte" => advice.extend([
            "Adaptez votre routine selon les zones (zone T et joues)",
            "Privilégiez les produits équilibrants",
            "Hydratez sans alourdir",
        ]),
        "sensible" => advice.extend([
            "Choisissez des produits hypoallergéniques",
            "Évitez les parfums et alcool",
            "Testez les nouveaux produits progressivement",
        ]),
        "normale" => advice.extend([
            "Maintenez l'équilibre avec une routine simple",
            "Protégez votre peau avec un SPF quotidien",
        ]),
        _ => {}
    }

    match etat_peau {
        "déshydratée" => advice.extend([
            "Intégrez un sérum hydratant à base d'acide hyaluronique",
            "Buvez suffisamment d'eau",
        ]),
        "terne" => advice.extend([
            "Utilisez des produits exfoliants doux (AHA/BHA)",
            "Intégrez de la vitamine C dans votre routine",
        ]),
        "irritée" => advice.extend([
            "Apaisez avec des actifs comme le centella asiatica",
            "Simplifiez votre routine temporairement",
        ]),
        "acnéique" => advice.extend([
            "Utilisez des actifs anti-imperfections (acide salicylique, niacinamide)",
            "Nettoyez votre peau matin et soir",
        ]),
        "mature" => advice.extend([
            "Intégrez des actifs anti-âge (rétinol, peptides)",
            "N'oubliez jamais votre crème contour des yeux",
        ]),
        _ => {}
    }

    if objectifs.iter().any(|objectif| objectif == "anti-taches") {
        advice.extend([
            "Utilisez un SPF 50 quotidiennement pour prévenir les taches",
            "Intégrez des actifs éclaircissants (vitamine C, arbutine)",
        ]);
    }

    advice.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::value_objects::fixtures::skin_answers;

    #[test]
    fn majority_letter_selects_the_skin_type() {
        let result = score_skin(&skin_answers());
        assert_eq!(result.type_peau, "sèche");
    }

    #[test]
    fn three_way_tie_resolves_alphabetically() {
        let mut answers = skin_answers();
        answers.q1 = "E".to_string();
        answers.q2 = "C".to_string();
        answers.q3 = "B".to_string();

        assert_eq!(score_skin(&answers).type_peau, "mixte");
    }

    #[test]
    fn maps_state_goals_and_sensitivities() {
        let result = score_skin(&skin_answers());

        assert_eq!(result.etat_peau, "déshydratée");
        assert_eq!(result.objectifs, vec!["hydratation", "anti-taches"]);
        assert_eq!(result.sensibilites, vec!["parfum", "lanoline"]);
        assert_eq!(result.niveau_sensibilite, "B");
        assert_eq!(result.budget, "B");
        assert_eq!(result.reaction_produits, "C");
    }

    #[test]
    fn blank_other_sensitivity_is_ignored() {
        let mut answers = skin_answers();
        answers.q8_other = Some("   ".to_string());

        assert_eq!(score_skin(&answers).sensibilites, vec!["parfum"]);
    }

    #[test]
    fn recommendations_follow_type_state_and_goals() {
        let result = score_skin(&skin_answers());

        assert_eq!(result.recommandations.len(), 7);
        assert_eq!(
            result.recommandations[0],
            "Utilisez des produits riches en actifs hydratants comme l'acide hyaluronique"
        );
        assert_eq!(
            result.recommandations[3],
            "Intégrez un sérum hydratant à base d'acide hyaluronique"
        );
        assert_eq!(
            result.recommandations[6],
            "Intégrez des actifs éclaircissants (vitamine C, arbutine)"
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let answers = skin_answers();
        let first = serde_json::to_vec(&score_skin(&answers)).unwrap();
        let second = serde_json::to_vec(&score_skin(&answers)).unwrap();

        assert_eq!(first, second);
    }
}
