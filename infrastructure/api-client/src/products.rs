use crate::config::ApiClientConfig;
use crate::error::ApiResult;
use crate::models::{HealthReport, Product, ProductPayload, ProductStats};
use crate::pipeline::{ApiClient, ApiRequest};

const PRODUCTS_PATH: &str = "/products";

/// Typed entry points for the catalog endpoints. Each call carries an
/// operation label that shows up in logs and error context.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    api: ApiClient,
}

impl ProductsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_config(config: &ApiClientConfig) -> Self {
        Self::new(ApiClient::new(config))
    }

    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.api
            .execute(ApiRequest::get(PRODUCTS_PATH).operation("list products"))
            .await
    }

    pub async fn get_product(&self, id: i64) -> ApiResult<Product> {
        self.api
            .execute(ApiRequest::get(product_path(id)).operation("get product"))
            .await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> ApiResult<Product> {
        self.api
            .execute(
                ApiRequest::post(PRODUCTS_PATH)
                    .json(payload)
                    .operation("create product"),
            )
            .await
    }

    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> ApiResult<Product> {
        self.api
            .execute(
                ApiRequest::put(product_path(id))
                    .json(payload)
                    .operation("update product"),
            )
            .await
    }

    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.api
            .execute_empty(ApiRequest::delete(product_path(id)).operation("delete product"))
            .await
    }

    pub async fn health(&self) -> ApiResult<HealthReport> {
        self.api
            .execute(ApiRequest::get(format!("{PRODUCTS_PATH}/health")).operation("check health"))
            .await
    }

    pub async fn stats(&self) -> ApiResult<ProductStats> {
        self.api
            .execute(ApiRequest::get(format!("{PRODUCTS_PATH}/stats")).operation("product stats"))
            .await
    }

    pub async fn categories(&self) -> ApiResult<Vec<String>> {
        self.api
            .execute(
                ApiRequest::get(format!("{PRODUCTS_PATH}/categories"))
                    .operation("list categories"),
            )
            .await
    }
}

fn product_path(id: i64) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn product_json(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "price": 129.99,
            "stock": 25,
            "category": "Peripherals",
            "isAvailable": true,
            "createdAt": "2026-10-19T08:00:00Z"
        })
    }

    fn client_for(server: &MockServer) -> ProductsClient {
        ProductsClient::from_config(&ApiClientConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn should_fetch_single_product() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/3"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(product_json(3, "Mechanical Keyboard")),
            )
            .mount(&server)
            .await;

        let product = client_for(&server).get_product(3).await.unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Mechanical Keyboard");
        assert_eq!(product.category.as_deref(), Some("Peripherals"));
    }

    #[tokio::test]
    async fn should_decode_products_with_lowercase_and_uppercase_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "name": "Wireless Mouse",
                    "price": 29.99,
                    "stock": 50,
                    "isavailable": true,
                    "createdat": "2026-10-19T08:00:00Z"
                },
                {
                    "ID": 2,
                    "NAME": "USB-C Hub",
                    "PRICE": 49.99,
                    "STOCK": 3,
                    "CATEGORY": "Accessories",
                    "ISAVAILABLE": false,
                    "CREATEDAT": "2026-10-19T08:00:00Z"
                }
            ])))
            .mount(&server)
            .await;

        let products = client_for(&server).list_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert!(products[0].is_available);
        assert_eq!(products[1].category.as_deref(), Some("Accessories"));
        assert!(!products[1].is_available);
        assert_eq!(products[0].created_at, products[1].created_at);
    }

    #[tokio::test]
    async fn should_label_not_found_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/3"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "name": "NotFound",
                "message": "product.not_found"
            })))
            .mount(&server)
            .await;

        let error = client_for(&server).get_product(3).await.unwrap_err();

        assert_eq!(error.code, ErrorCode::HttpError);
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.context.operation.as_deref(), Some("get product"));
    }

    #[tokio::test]
    async fn should_post_payload_when_creating() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/products"))
            .and(body_json(json!({
                "name": "X",
                "price": 9.99,
                "stock": 1,
                "isAvailable": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(product_json(6, "X")))
            .expect(1)
            .mount(&server)
            .await;

        let created = client_for(&server)
            .create_product(&ProductPayload::new("X", 9.99, 1))
            .await
            .unwrap();

        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn should_treat_no_content_as_successful_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/products/3"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        assert!(client_for(&server).delete_product(3).await.is_ok());
    }

    #[tokio::test]
    async fn should_decode_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/categories"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!(["Accessories", "Displays"])),
            )
            .mount(&server)
            .await;

        let categories = client_for(&server).categories().await.unwrap();

        assert_eq!(categories, vec!["Accessories", "Displays"]);
    }

    #[tokio::test]
    async fn should_decode_stats_without_prices() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalProducts": 0,
                "inStock": 0,
                "lowStock": 0,
                "outOfStock": 0
            })))
            .mount(&server)
            .await;

        let stats = client_for(&server).stats().await.unwrap();

        assert_eq!(stats.total_products, 0);
        assert!(stats.average_price.is_none());
    }
}
