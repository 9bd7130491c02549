use crate::domain::{
    authentication::ports::UserRoleRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnostic::ports::{DiagnosticClassifier, DiagnosticRepository},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    product::ports::ProductRepository,
    product_analysis::ports::{ProductLookup, ScanHistoryRepository},
    routine::ports::RoutineRepository,
};

impl<IR, PR, RR, SH, DR, UR, HC, PL, DC> HealthCheckService
    for Service<IR, PR, RR, SH, DR, UR, HC, PL, DC>
where
    IR: IngredientRepository,
    PR: ProductRepository,
    RR: RoutineRepository,
    SH: ScanHistoryRepository,
    DR: DiagnosticRepository,
    UR: UserRoleRepository,
    HC: HealthCheckRepository,
    PL: ProductLookup,
    DC: DiagnosticClassifier,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
