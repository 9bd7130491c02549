use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Canonical severity scale of a catalog ingredient.
///
/// Serialized as its integer level (`0..=3`). The catalog table stores the
/// level as text, converted through [`HazardTier::from_catalog_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HazardTier {
    Safe = 0,
    Low = 1,
    Moderate = 2,
    High = 3,
}

impl HazardTier {
    pub const ALL: [HazardTier; 4] = [
        HazardTier::Safe,
        HazardTier::Low,
        HazardTier::Moderate,
        HazardTier::High,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            HazardTier::Safe => "Sûr",
            HazardTier::Low => "Attention",
            HazardTier::Moderate => "Modéré",
            HazardTier::High => "Élevé",
        }
    }

    /// Tiers 2 and 3 are reported as dangerous in product summaries.
    pub fn is_dangerous(self) -> bool {
        matches!(self, HazardTier::Moderate | HazardTier::High)
    }

    /// Parses the textual `danger_level` column (`"0"` to `"3"`).
    pub fn from_catalog_value(value: &str) -> Option<Self> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|level| HazardTier::try_from(level).ok())
    }

    pub fn as_catalog_value(self) -> &'static str {
        match self {
            HazardTier::Safe => "0",
            HazardTier::Low => "1",
            HazardTier::Moderate => "2",
            HazardTier::High => "3",
        }
    }
}

impl TryFrom<u8> for HazardTier {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(HazardTier::Safe),
            1 => Ok(HazardTier::Low),
            2 => Ok(HazardTier::Moderate),
            3 => Ok(HazardTier::High),
            other => Err(format!("hazard tier must be between 0 and 3, got {}", other)),
        }
    }
}

impl From<HazardTier> for u8 {
    fn from(tier: HazardTier) -> Self {
        tier.level()
    }
}

impl fmt::Display for HazardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// How a catalog entry is addressed from the outside: by id or by its exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientLookup {
    Id(Uuid),
    Name(String),
}

impl From<&str> for IngredientLookup {
    fn from(value: &str) -> Self {
        match Uuid::parse_str(value) {
            Ok(id) => IngredientLookup::Id(id),
            Err(_) => IngredientLookup::Name(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetIngredientsFilter {
    /// Case-insensitive substring of the ingredient name.
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CreateIngredientInput {
    pub name: String,
    pub hazard_tier: u8,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateIngredientInput {
    pub ingredient_id: Uuid,
    pub name: String,
    pub hazard_tier: u8,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Catalog fields after trimming and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientFields {
    pub name: String,
    pub hazard_tier: HazardTier,
    pub category: Option<String>,
    pub description: Option<String>,
}

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 200;
const CATEGORY_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 1000;

impl IngredientFields {
    pub fn validate(
        name: &str,
        hazard_tier: u8,
        category: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        let name_len = name.chars().count();
        if name_len < NAME_MIN_CHARS {
            return Err(CoreError::validation(
                "name",
                format!("must contain at least {} characters", NAME_MIN_CHARS),
            ));
        }
        if name_len > NAME_MAX_CHARS {
            return Err(CoreError::validation(
                "name",
                format!("must not exceed {} characters", NAME_MAX_CHARS),
            ));
        }

        let category = optional_text("category", category, CATEGORY_MAX_CHARS)?;
        let description = optional_text("description", description, DESCRIPTION_MAX_CHARS)?;

        let hazard_tier = HazardTier::try_from(hazard_tier)
            .map_err(|message| CoreError::validation("hazard_tier", message))?;

        Ok(Self {
            name: name.to_string(),
            hazard_tier,
            category,
            description,
        })
    }
}

/// Blank optional text is stored as `None`.
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

    #[test]
    fn catalog_text_levels_round_trip() {
        for tier in HazardTier::ALL {
            assert_eq!(
                HazardTier::from_catalog_value(tier.as_catalog_value()),
                Some(tier)
            );
        }
        assert_eq!(HazardTier::from_catalog_value(" 2 "), Some(HazardTier::Moderate));
        assert_eq!(HazardTier::from_catalog_value("4"), None);
        assert_eq!(HazardTier::from_catalog_value("high"), None);
    }

    #[test]
    fn serializes_as_integer_level() {
        assert_eq!(serde_json::to_string(&HazardTier::High).unwrap(), "3");
        let tier: HazardTier = serde_json::from_str("1").unwrap();
        assert_eq!(tier, HazardTier::Low);
        assert!(serde_json::from_str::<HazardTier>("7").is_err());
    }

    #[test]
    fn only_tiers_two_and_three_are_dangerous() {
        assert!(!HazardTier::Safe.is_dangerous());
        assert!(!HazardTier::Low.is_dangerous());
        assert!(HazardTier::Moderate.is_dangerous());
        assert!(HazardTier::High.is_dangerous());
    }

    #[test]
    fn lookup_parses_uuid_or_falls_back_to_name() {
        let id = Uuid::new_v4();
        assert_eq!(
            IngredientLookup::from(id.to_string().as_str()),
            IngredientLookup::Id(id)
        );
        assert_eq!(
            IngredientLookup::from("Sodium Laureth Sulfate"),
            IngredientLookup::Name("Sodium Laureth Sulfate".to_string())
        );
    }

    #[test]
    fn fields_are_trimmed_and_blank_optionals_dropped() {
        let fields =
            IngredientFields::validate("  Parfum ", 2, Some("  "), Some(" Allergène ")).unwrap();
        assert_eq!(fields.name, "Parfum");
        assert_eq!(fields.hazard_tier, HazardTier::Moderate);
        assert_eq!(fields.category, None);
        assert_eq!(fields.description.as_deref(), Some("Allergène"));
    }

    #[test]
    fn fields_report_the_offending_field() {
        let err = IngredientFields::validate(" a ", 0, None, None).unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "name"));

        let err = IngredientFields::validate("Aqua", 4, None, None).unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "hazard_tier"));

        let long = "x".repeat(101);
        let err = IngredientFields::validate("Aqua", 0, Some(&long), None).unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "category"));
    }
}
