use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        diagnostic::{
            entities::{Diagnostic, DiagnosticKind},
            ports::DiagnosticRepository,
            value_objects::GetDiagnosticsFilter,
        },
    },
    entity::diagnostics::{
        ActiveModel as DiagnosticActiveModel, Column as DiagnosticColumn,
        Entity as DiagnosticEntity, Model as DiagnosticModel,
    },
    infrastructure::diagnostic::mappers::stored_result,
};

#[derive(Debug, Clone)]
pub struct PostgresDiagnosticRepository {
    pub db: DatabaseConnection,
}

impl PostgresDiagnosticRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Rows of an unknown questionnaire type are skipped in listings.
fn readable(models: Vec<DiagnosticModel>) -> Vec<Diagnostic> {
    models
        .into_iter()
        .filter_map(|model| {
            let id = model.id;
            Diagnostic::try_from(model)
                .inspect_err(|e| warn!(diagnostic_id = %id, "Skipping unreadable diagnostic: {}", e))
                .ok()
        })
        .collect()
}

fn to_domain(model: DiagnosticModel) -> Result<Diagnostic, CoreError> {
    Diagnostic::try_from(model).map_err(|e| {
        error!("Failed to read diagnostic: {}", e);
        CoreError::InternalServerError
    })
}

impl DiagnosticRepository for PostgresDiagnosticRepository {
    async fn create_diagnostic(&self, diagnostic: Diagnostic) -> Result<Diagnostic, CoreError> {
        let model = DiagnosticEntity::insert(DiagnosticActiveModel {
            id: Set(diagnostic.id),
            user_id: Set(diagnostic.user_id),
            kind: Set(diagnostic.kind.as_str().to_string()),
            answers: Set(diagnostic.answers),
            result: Set(Some(stored_result(diagnostic.result, diagnostic.used_fallback))),
            created_at: Set(diagnostic.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create diagnostic: {}", e);
            CoreError::InternalServerError
        })?;

        to_domain(model)
    }

    async fn get_latest_by_user(
        &self,
        user_id: Uuid,
        kind: DiagnosticKind,
    ) -> Result<Option<Diagnostic>, CoreError> {
        let model = DiagnosticEntity::find()
            .filter(DiagnosticColumn::UserId.eq(user_id))
            .filter(DiagnosticColumn::Kind.eq(kind.as_str()))
            .order_by_desc(DiagnosticColumn::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get latest diagnostic: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(to_domain).transpose()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Diagnostic>, CoreError> {
        let models = DiagnosticEntity::find()
            .filter(DiagnosticColumn::UserId.eq(user_id))
            .order_by_desc(DiagnosticColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list diagnostics: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(readable(models))
    }

    async fn list_all(&self, filter: GetDiagnosticsFilter) -> Result<Vec<Diagnostic>, CoreError> {
        let mut query = DiagnosticEntity::find();

        if let Some(kind) = filter.kind {
            query = query.filter(DiagnosticColumn::Kind.eq(kind.as_str()));
        }

        query = query.order_by_desc(DiagnosticColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list all diagnostics: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(readable(models))
    }

    async fn get_by_id(&self, diagnostic_id: Uuid) -> Result<Option<Diagnostic>, CoreError> {
        let model = DiagnosticEntity::find_by_id(diagnostic_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get diagnostic: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(to_domain).transpose()
    }

    async fn delete_diagnostic(&self, diagnostic_id: Uuid) -> Result<(), CoreError> {
        DiagnosticEntity::delete_by_id(diagnostic_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete diagnostic: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
