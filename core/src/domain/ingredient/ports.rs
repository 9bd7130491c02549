use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        value_objects::{CreateIngredientInput, GetIngredientsFilter, UpdateIngredientInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn list_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// A UUID addresses the entry by id, anything else by its exact name.
    fn get_ingredient(
        &self,
        id_or_name: String,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn create_ingredient(
        &self,
        context: AuthorizationContext,
        input: CreateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        context: AuthorizationContext,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        context: AuthorizationContext,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    /// The whole catalog ordered by name. Matching depends on this order.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn list_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait IngredientPolicy: Send + Sync {
    fn can_manage_catalog(
        &self,
        context: &AuthorizationContext,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
