use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let start = Instant::now();

        self.db
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| {
                error!("Database readiness check failed: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(DatabaseHealthStatus {
            healthy: true,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
