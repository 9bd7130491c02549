use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{entities::Product, ports::ProductRepository, value_objects::GetProductsFilter},
    },
    entity::global_products::{
        ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as ProductEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(product: Product) -> ProductActiveModel {
    ProductActiveModel {
        id: Set(product.id),
        name: Set(product.name),
        brand: Set(product.brand),
        barcode: Set(product.barcode),
        product_type: Set(product.product_type),
        category: Set(product.category),
        ingredients: Set(product.ingredients),
        created_at: Set(product.created_at.fixed_offset()),
        updated_at: Set(product.updated_at.fixed_offset()),
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn list_products(&self, filter: GetProductsFilter) -> Result<Vec<Product>, CoreError> {
        let mut query = ProductEntity::find();

        if let Some(search) = filter.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            let pattern = format!("%{}%", search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(ProductColumn::Name).ilike(pattern.clone()))
                    .add(Expr::col(ProductColumn::Brand).ilike(pattern.clone()))
                    .add(Expr::col(ProductColumn::Barcode).ilike(pattern)),
            );
        }

        query = query.order_by_desc(ProductColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }

        let products = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list products: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Product::from)
            .collect::<Vec<Product>>();

        Ok(products)
    }

    async fn get_by_id(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn get_by_barcode(&self, barcode: String) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find()
            .filter(ProductColumn::Barcode.eq(barcode))
            .order_by_asc(ProductColumn::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by barcode: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        let created = ProductEntity::insert(to_active_model(product))
            .exec_with_returning(&self.db)
            .await
            .map(Product::from)
            .map_err(|e| {
                error!("Failed to create product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        let product_id = product.id;
        let updated = ProductEntity::update(to_active_model(product))
            .filter(ProductColumn::Id.eq(product_id))
            .exec(&self.db)
            .await
            .map(Product::from)
            .map_err(|e| {
                error!("Failed to update product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated)
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), CoreError> {
        ProductEntity::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
