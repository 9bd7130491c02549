use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ingredient::value_objects::HazardTier, product_analysis::entities::IngredientMatch};

/// Whole-product risk badge, serialized as `0`, `1` or `2`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum OverallRisk {
    #[default]
    Safe = 0,
    Moderate = 1,
    Dangerous = 2,
}

impl OverallRisk {
    pub fn label(self) -> &'static str {
        match self {
            OverallRisk::Safe => "Sûr",
            OverallRisk::Moderate => "Modéré",
            OverallRisk::Dangerous => "Dangereux",
        }
    }
}

impl TryFrom<u8> for OverallRisk {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(OverallRisk::Safe),
            1 => Ok(OverallRisk::Moderate),
            2 => Ok(OverallRisk::Dangerous),
            other => Err(format!("overall risk must be between 0 and 2, got {}", other)),
        }
    }
}

impl From<OverallRisk> for u8 {
    fn from(risk: OverallRisk) -> Self {
        risk as u8
    }
}

/// How catalog tiers are folded into the summary buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketScheme {
    /// Tiers 2 and 3 are dangerous, tier 1 moderate, tier 0 safe.
    #[default]
    Canonical,
    /// Product detail view: tier 1 is counted as safe.
    TwoBucket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductRiskSummary {
    pub dangerous_count: usize,
    pub moderate_count: usize,
    pub safe_count: usize,
    pub unknown_count: usize,
    #[schema(value_type = u8, minimum = 0, maximum = 2)]
    pub overall_tier: OverallRisk,
}

impl ProductRiskSummary {
    pub fn total(&self) -> usize {
        self.dangerous_count + self.moderate_count + self.safe_count + self.unknown_count
    }
}

pub fn aggregate(matches: &[IngredientMatch]) -> ProductRiskSummary {
    aggregate_with(matches, BucketScheme::Canonical)
}

pub fn aggregate_with(matches: &[IngredientMatch], scheme: BucketScheme) -> ProductRiskSummary {
    let mut summary = ProductRiskSummary::default();

    for tier in matches
        .iter()
        .map(|m| m.record.as_ref().and_then(|record| record.hazard_tier))
    {
        match tier {
            None => summary.unknown_count += 1,
            Some(tier) if tier.is_dangerous() => summary.dangerous_count += 1,
            Some(HazardTier::Low) if scheme == BucketScheme::Canonical => {
                summary.moderate_count += 1
            }
            Some(_) => summary.safe_count += 1,
        }
    }

    summary.overall_tier = overall_risk(summary.dangerous_count, summary.moderate_count);
    summary
}

fn overall_risk(dangerous_count: usize, moderate_count: usize) -> OverallRisk {
    if dangerous_count > 0 || moderate_count >= 2 {
        OverallRisk::Dangerous
    } else if moderate_count >= 1 {
        OverallRisk::Moderate
    } else {
        OverallRisk::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::{entities::Ingredient, value_objects::IngredientFields};

    fn matched(tier: Option<HazardTier>) -> IngredientMatch {
        let record = tier.map(|tier| {
            Ingredient::new(IngredientFields {
                name: format!("tier {}", tier),
                hazard_tier: tier,
                category: None,
                description: None,
            })
        });

        IngredientMatch::new("x".to_string(), record)
    }

    fn untiered() -> IngredientMatch {
        let mut record = Ingredient::new(IngredientFields {
            name: "untiered".to_string(),
            hazard_tier: HazardTier::Safe,
            category: None,
            description: None,
        });
        record.hazard_tier = None;
        IngredientMatch::new("x".to_string(), Some(record))
    }

    fn sample() -> Vec<IngredientMatch> {
        vec![
            matched(Some(HazardTier::Safe)),
            matched(Some(HazardTier::Low)),
            matched(None),
            matched(Some(HazardTier::High)),
            untiered(),
            matched(Some(HazardTier::Moderate)),
            matched(Some(HazardTier::Low)),
        ]
    }

    #[test]
    fn counts_always_sum_to_input_length() {
        let matches = sample();
        for len in 0..=matches.len() {
            let slice = &matches[..len];
            assert_eq!(aggregate(slice).total(), len);
            assert_eq!(aggregate_with(slice, BucketScheme::TwoBucket).total(), len);
        }
    }

    #[test]
    fn canonical_buckets() {
        let summary = aggregate(&sample());
        assert_eq!(summary.dangerous_count, 2);
        assert_eq!(summary.moderate_count, 2);
        assert_eq!(summary.safe_count, 1);
        assert_eq!(summary.unknown_count, 2);
        assert_eq!(summary.overall_tier, OverallRisk::Dangerous);
    }

    #[test]
    fn two_bucket_scheme_counts_low_as_safe() {
        let summary = aggregate_with(&sample(), BucketScheme::TwoBucket);
        assert_eq!(summary.moderate_count, 0);
        assert_eq!(summary.safe_count, 3);
        assert_eq!(summary.dangerous_count, 2);
    }

    #[test]
    fn aggregation_ignores_order() {
        let matches = sample();
        let expected = aggregate(&matches);

        let mut reversed = matches.clone();
        reversed.reverse();
        assert_eq!(aggregate(&reversed), expected);

        for shift in 1..matches.len() {
            let mut rotated = matches.clone();
            rotated.rotate_left(shift);
            assert_eq!(aggregate(&rotated), expected);
        }
    }

    #[test]
    fn overall_tier_precedence() {
        assert_eq!(aggregate(&[]).overall_tier, OverallRisk::Safe);
        assert_eq!(
            aggregate(&[matched(Some(HazardTier::Safe)), matched(None)]).overall_tier,
            OverallRisk::Safe
        );
        assert_eq!(
            aggregate(&[matched(Some(HazardTier::Low))]).overall_tier,
            OverallRisk::Moderate
        );
        assert_eq!(
            aggregate(&[matched(Some(HazardTier::Low)), matched(Some(HazardTier::Low))])
                .overall_tier,
            OverallRisk::Dangerous
        );
        assert_eq!(
            aggregate(&[matched(Some(HazardTier::Moderate))]).overall_tier,
            OverallRisk::Dangerous
        );
    }

    #[test]
    fn adding_a_high_tier_item_never_lowers_the_badge() {
        let matches = sample();
        for len in 0..=matches.len() {
            let mut base = matches[..len].to_vec();
            let before = aggregate(&base).overall_tier;
            base.push(matched(Some(HazardTier::High)));
            assert!(aggregate(&base).overall_tier >= before);
            assert_eq!(aggregate(&base).overall_tier, OverallRisk::Dangerous);
        }
    }

    #[test]
    fn serializes_badge_as_integer() {
        let summary = aggregate(&[matched(Some(HazardTier::Low))]);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["overall_tier"], 1);
        assert_eq!(json["moderate_count"], 1);
    }
}
