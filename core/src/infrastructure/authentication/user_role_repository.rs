use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::UserRoleRepository, value_objects::Role},
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRoleRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRoleRepository for PostgresUserRoleRepository {
    async fn get_roles_by_user_id(&self, user_id: Uuid) -> Result<Vec<Role>, CoreError> {
        // `role` is a Postgres enum owned by the hosted backend
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT role::text AS role
            FROM user_roles
            WHERE user_id = $1
            "#,
            [user_id.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get roles by user id: {}", e);
            CoreError::InternalServerError
        })?;

        let roles = rows
            .iter()
            .filter_map(|row| row.try_get::<String>("", "role").ok())
            .map(|role| Role::from(role.as_str()))
            .collect::<Vec<Role>>();

        Ok(roles)
    }
}
