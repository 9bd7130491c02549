use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::entities::app_errors::CoreError,
    routine::{
        entities::Routine,
        value_objects::{CreateRoutineInput, GetRoutinesFilter, UpdateRoutineInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RoutineService: Send + Sync {
    fn list_routines(
        &self,
        filter: GetRoutinesFilter,
    ) -> impl Future<Output = Result<Vec<Routine>, CoreError>> + Send;

    fn get_routine(
        &self,
        routine_id: Uuid,
    ) -> impl Future<Output = Result<Routine, CoreError>> + Send;

    fn create_routine(
        &self,
        context: AuthorizationContext,
        input: CreateRoutineInput,
    ) -> impl Future<Output = Result<Routine, CoreError>> + Send;

    fn update_routine(
        &self,
        context: AuthorizationContext,
        input: UpdateRoutineInput,
    ) -> impl Future<Output = Result<Routine, CoreError>> + Send;

    fn delete_routine(
        &self,
        context: AuthorizationContext,
        routine_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RoutineRepository: Send + Sync {
    /// Ordered by routine type, then by position within the routine.
    fn list_routines(
        &self,
        filter: GetRoutinesFilter,
    ) -> impl Future<Output = Result<Vec<Routine>, CoreError>> + Send;

    fn get_by_id(
        &self,
        routine_id: Uuid,
    ) -> impl Future<Output = Result<Option<Routine>, CoreError>> + Send;

    fn create_routine(
        &self,
        routine: Routine,
    ) -> impl Future<Output = Result<Routine, CoreError>> + Send;

    fn update_routine(
        &self,
        routine: Routine,
    ) -> impl Future<Output = Result<Routine, CoreError>> + Send;

    fn delete_routine(&self, routine_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait RoutinePolicy: Send + Sync {
    fn can_manage_routines(
        &self,
        context: &AuthorizationContext,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
