use crate::domain::{ingredient::entities::Ingredient, product_analysis::entities::IngredientMatch};

/// Pairs every parsed name with the first catalog entry that matches it.
///
/// Both sides are lowercased and trimmed; an entry matches when either name
/// contains the other. The catalog is walked in the order given, so callers
/// pass it sorted by name to keep results stable.
pub fn match_ingredients(names: &[String], catalog: &[Ingredient]) -> Vec<IngredientMatch> {
    let normalized_catalog: Vec<(String, &Ingredient)> = catalog
        .iter()
        .map(|record| (normalize(&record.name), record))
        .filter(|(name, _)| !name.is_empty())
        .collect();

    names
        .iter()
        .map(|raw_name| {
            let needle = normalize(raw_name);
            let record = if needle.is_empty() {
                None
            } else {
                normalized_catalog
                    .iter()
                    .find(|(name, _)| name.contains(&needle) || needle.contains(name.as_str()))
                    .map(|(_, record)| (*record).clone())
            };

            IngredientMatch::new(raw_name.clone(), record)
        })
        .collect()
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::value_objects::{HazardTier, IngredientFields};

    fn record(name: &str, tier: HazardTier) -> Ingredient {
        Ingredient::new(IngredientFields {
            name: name.to_string(),
            hazard_tier: tier,
            category: None,
            description: None,
        })
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn matches_case_insensitively() {
        let catalog = vec![record("parfum", HazardTier::Moderate)];
        let matches = match_ingredients(&names(&["Parfum"]), &catalog);

        assert_eq!(matches.len(), 1);
        let matched = matches[0].record.as_ref().unwrap();
        assert_eq!(matched.hazard_tier, Some(HazardTier::Moderate));
    }

    #[test]
    fn containment_works_in_both_directions() {
        let catalog = vec![record("Aqua Extract", HazardTier::Safe)];
        let matches = match_ingredients(&names(&["aqua", "Rosa Damascena Aqua Extract"]), &catalog);

        assert!(matches.iter().all(|m| m.record.is_some()));
    }

    #[test]
    fn first_catalog_entry_wins() {
        let catalog = vec![
            record("Alcohol", HazardTier::Moderate),
            record("Alcohol Denat", HazardTier::High),
        ];
        let matches = match_ingredients(&names(&["Alcohol Denat."]), &catalog);

        assert_eq!(matches[0].record.as_ref().unwrap().name, "Alcohol");
    }

    #[test]
    fn unknown_names_keep_their_position() {
        let catalog = vec![record("Glycerin", HazardTier::Safe)];
        let matches = match_ingredients(&names(&["Mystery", "glycerin", "Other"]), &catalog);

        let raw: Vec<&str> = matches.iter().map(|m| m.raw_name.as_str()).collect();
        assert_eq!(raw, vec!["Mystery", "glycerin", "Other"]);
        assert!(matches[0].record.is_none());
        assert!(matches[1].record.is_some());
        assert!(matches[2].record.is_none());
    }

    #[test]
    fn blank_catalog_names_never_match() {
        let catalog = vec![record("   ", HazardTier::High)];
        let matches = match_ingredients(&names(&["Aqua"]), &catalog);

        assert!(matches[0].record.is_none());
    }
}
