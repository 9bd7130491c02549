use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeIngredientsInput {
    pub ingredients_text: String,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanPeriod {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl ScanPeriod {
    /// Whether a scan taken at `scanned_at` falls in the period ending at `now`.
    pub fn contains(self, scanned_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            ScanPeriod::All => true,
            ScanPeriod::Today => scanned_at.date_naive() == now.date_naive(),
            ScanPeriod::Week => scanned_at > now - Duration::days(7),
            ScanPeriod::Month => scanned_at > now - Duration::days(30),
        }
    }
}

impl FromStr for ScanPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ScanPeriod::All),
            "today" => Ok(ScanPeriod::Today),
            "week" => Ok(ScanPeriod::Week),
            "month" => Ok(ScanPeriod::Month),
            _ => Err(CoreError::validation(
                "period",
                "expected one of all, today, week, month",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanHistoryFilter {
    pub search: Option<String>,
    pub period: ScanPeriod,
}
