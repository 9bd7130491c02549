use crate::application::auth::RequiredContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use beautyscan_core::domain::product_analysis::entities::ScanHistoryEntry;
use beautyscan_core::domain::product_analysis::ports::ScanHistoryService;
use beautyscan_core::domain::product_analysis::value_objects::{ScanHistoryFilter, ScanPeriod};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetScansQuery {
    /// Case-insensitive part of the product name or brand
    pub search: Option<String>,
    /// One of `all`, `today`, `week`, `month`
    pub period: Option<String>,
}

impl TryFrom<GetScansQuery> for ScanHistoryFilter {
    type Error = ApiError;

    fn try_from(query: GetScansQuery) -> Result<Self, Self::Error> {
        let period = match query.period.as_deref() {
            None | Some("") => ScanPeriod::All,
            Some(period) => period.parse::<ScanPeriod>().map_err(ApiError::from)?,
        };

        Ok(ScanHistoryFilter {
            search: query.search,
            period,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScansResponse {
    pub data: Vec<ScanHistoryEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "scan",
    summary = "List scan history",
    description = "Lists the caller's scans, newest first, filtered by search text and period.",
    params(GetScansQuery),
    responses(
        (status = 200, body = GetScansResponse),
        (status = 400, description = "Unknown period")
    ),
)]
pub async fn get_scans(
    Query(query): Query<GetScansQuery>,
    State(state): State<AppState>,
    RequiredContext(context): RequiredContext,
) -> Result<Response<GetScansResponse>, ApiError> {
    let scans = state
        .service
        .list_scan_history(context, ScanHistoryFilter::try_from(query)?)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScansResponse { data: scans }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_period_means_everything() {
        let filter = ScanHistoryFilter::try_from(GetScansQuery {
            search: Some("nivea".to_string()),
            period: None,
        })
        .unwrap();

        assert_eq!(filter.period, ScanPeriod::All);
        assert_eq!(filter.search.as_deref(), Some("nivea"));
    }

    #[test]
    fn unknown_period_is_a_bad_request() {
        let result = ScanHistoryFilter::try_from(GetScansQuery {
            search: None,
            period: Some("year".to_string()),
        });

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
