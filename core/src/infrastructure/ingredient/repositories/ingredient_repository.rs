use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        ingredient::{entities::Ingredient, ports::IngredientRepository, value_objects::GetIngredientsFilter},
    },
    entity::global_ingredients::{
        ActiveModel as IngredientActiveModel, Column as IngredientColumn,
        Entity as IngredientEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(ingredient: Ingredient) -> IngredientActiveModel {
    IngredientActiveModel {
        id: Set(ingredient.id),
        name: Set(ingredient.name),
        danger_level: Set(ingredient
            .hazard_tier
            .map(|tier| tier.as_catalog_value().to_string())),
        category: Set(ingredient.category),
        description: Set(ingredient.description),
        created_at: Set(ingredient.created_at.fixed_offset()),
        updated_at: Set(ingredient.updated_at.fixed_offset()),
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn fetch_catalog(&self) -> Result<Vec<Ingredient>, CoreError> {
        let ingredients = IngredientEntity::find()
            .order_by_asc(IngredientColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredient catalog: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect::<Vec<Ingredient>>();

        Ok(ingredients)
    }

    async fn list_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut query = IngredientEntity::find();

        if let Some(search) = filter.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            query = query.filter(Expr::col(IngredientColumn::Name).ilike(format!("%{}%", search)));
        }

        query = query.order_by_asc(IngredientColumn::Name);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }

        let ingredients = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect::<Vec<Ingredient>>();

        Ok(ingredients)
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find()
            .filter(IngredientColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let created = IngredientEntity::insert(to_active_model(ingredient))
            .exec_with_returning(&self.db)
            .await
            .map(Ingredient::from)
            .map_err(|e| {
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn update_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let ingredient_id = ingredient.id;
        let updated = IngredientEntity::update(to_active_model(ingredient))
            .filter(IngredientColumn::Id.eq(ingredient_id))
            .exec(&self.db)
            .await
            .map(Ingredient::from)
            .map_err(|e| {
                error!("Failed to update ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated)
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        IngredientEntity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
