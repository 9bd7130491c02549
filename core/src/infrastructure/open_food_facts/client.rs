use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::{entities::ExternalProduct, ports::ProductLookup},
};

#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    status: i64,
    #[serde(default)]
    product: Option<ProductPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct ProductPayload {
    product_name: Option<String>,
    brands: Option<String>,
    categories: Option<String>,
    ingredients_text: Option<String>,
    image_url: Option<String>,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build Open Food Facts client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self { base_url, client })
    }

    fn product_url(&self, barcode: &str) -> String {
        format!(
            "{}/api/v0/product/{}.json",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(barcode)
        )
    }
}

/// `status: 0` is how the database says the barcode is unknown.
fn into_product(barcode: String, response: ProductResponse) -> Option<ExternalProduct> {
    if response.status == 0 {
        return None;
    }

    let product = response.product.unwrap_or_default();
    Some(ExternalProduct {
        barcode: response.code.unwrap_or(barcode),
        product_name: product.product_name,
        brands: product.brands,
        categories: product.categories,
        ingredients_text: product.ingredients_text,
        image_url: product.image_url,
    })
}

impl ProductLookup for OpenFoodFactsClient {
    async fn find_by_barcode(&self, barcode: String) -> Result<Option<ExternalProduct>, CoreError> {
        let response = match self.client.get(self.product_url(&barcode)).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(barcode = %barcode, "Open Food Facts request failed: {}", e);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            debug!(barcode = %barcode, status = %response.status(), "Open Food Facts lookup miss");
            return Ok(None);
        }

        match response.json::<ProductResponse>().await {
            Ok(body) => Ok(into_product(barcode, body)),
            Err(e) => {
                warn!(barcode = %barcode, "Unreadable Open Food Facts response: {}", e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barcode_is_encoded_into_the_product_path() {
        let client = OpenFoodFactsClient::new(
            "https://world.openfoodfacts.org/".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.product_url("3600 523"),
            "https://world.openfoodfacts.org/api/v0/product/3600%20523.json"
        );
    }

    #[test]
    fn status_zero_means_unknown_product() {
        let body: ProductResponse =
            serde_json::from_str(r#"{"code":"123","status":0,"status_verbose":"product not found"}"#)
                .unwrap();
        assert_eq!(into_product("123".to_string(), body), None);
    }

    #[test]
    fn known_product_keeps_its_ingredient_text() {
        let body: ProductResponse = serde_json::from_str(
            r#"{"code":"3600523","status":1,"product":{"product_name":"Crème","brands":"Marque","ingredients_text":"Aqua, Glycerin"}}"#,
        )
        .unwrap();

        let product = into_product("3600523".to_string(), body).unwrap();
        assert_eq!(product.product_name.as_deref(), Some("Crème"));
        assert_eq!(product.ingredients_text.as_deref(), Some("Aqua, Glycerin"));
        assert_eq!(product.image_url, None);
    }
}
