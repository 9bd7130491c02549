use chrono::Utc;

use crate::domain::product::entities::Product;
use crate::entity::global_products::Model as ProductModel;

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            brand: model.brand,
            barcode: model.barcode,
            product_type: model.product_type,
            category: model.category,
            ingredients: model.ingredients,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
