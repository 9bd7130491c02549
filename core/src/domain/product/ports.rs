use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::AuthorizationContext,
    common::entities::app_errors::CoreError,
    product::{
        entities::{Product, ProductDetail},
        value_objects::{CreateProductInput, GetProductsFilter, UpdateProductInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    fn list_products(
        &self,
        filter: GetProductsFilter,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    /// The product with its ingredients matched and bucketed for the detail screen.
    fn get_product_detail(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<ProductDetail, CoreError>> + Send;

    fn create_product(
        &self,
        context: AuthorizationContext,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        context: AuthorizationContext,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        context: AuthorizationContext,
        product_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Newest products first.
    fn list_products(
        &self,
        filter: GetProductsFilter,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(&self, product_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ProductPolicy: Send + Sync {
    fn can_manage_products(
        &self,
        context: &AuthorizationContext,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
