use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        routine::{entities::Routine, ports::RoutineRepository, value_objects::GetRoutinesFilter},
    },
    entity::routines::{
        ActiveModel as RoutineActiveModel, Column as RoutineColumn, Entity as RoutineEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRoutineRepository {
    pub db: DatabaseConnection,
}

impl PostgresRoutineRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(routine: Routine) -> RoutineActiveModel {
    let recommended_for = Some(routine.recommended_for).filter(|profiles| !profiles.is_empty());

    RoutineActiveModel {
        id: Set(routine.id),
        title: Set(routine.title),
        description: Set(routine.description),
        step: Set(routine.step),
        routine_type: Set(routine.routine_type),
        order_index: Set(Some(routine.order_index)),
        recommended_for: Set(recommended_for),
        created_at: Set(routine.created_at.fixed_offset()),
        updated_at: Set(routine.updated_at.fixed_offset()),
    }
}

impl RoutineRepository for PostgresRoutineRepository {
    async fn list_routines(&self, filter: GetRoutinesFilter) -> Result<Vec<Routine>, CoreError> {
        let mut query = RoutineEntity::find();

        if let Some(routine_type) = filter.routine_type {
            query = query.filter(RoutineColumn::RoutineType.eq(routine_type));
        }

        let routines = query
            .order_by_asc(RoutineColumn::RoutineType)
            .order_by_asc(RoutineColumn::OrderIndex)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list routines: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Routine::from)
            .collect::<Vec<Routine>>();

        Ok(routines)
    }

    async fn get_by_id(&self, routine_id: Uuid) -> Result<Option<Routine>, CoreError> {
        let routine = RoutineEntity::find_by_id(routine_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get routine by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Routine::from);

        Ok(routine)
    }

    async fn create_routine(&self, routine: Routine) -> Result<Routine, CoreError> {
        let created = RoutineEntity::insert(to_active_model(routine))
            .exec_with_returning(&self.db)
            .await
            .map(Routine::from)
            .map_err(|e| {
                error!("Failed to create routine: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn update_routine(&self, routine: Routine) -> Result<Routine, CoreError> {
        let routine_id = routine.id;
        let updated = RoutineEntity::update(to_active_model(routine))
            .filter(RoutineColumn::Id.eq(routine_id))
            .exec(&self.db)
            .await
            .map(Routine::from)
            .map_err(|e| {
                error!("Failed to update routine: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated)
    }

    async fn delete_routine(&self, routine_id: Uuid) -> Result<(), CoreError> {
        RoutineEntity::delete_by_id(routine_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete routine: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
