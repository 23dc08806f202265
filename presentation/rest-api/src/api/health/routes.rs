use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::product::use_cases::check_health::CheckStoreHealthUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::health::dto::HealthResponse;
use crate::api::tags::ApiTags;

/// Health API for monitoring and infrastructure checks
pub struct HealthApi {
    check_health_use_case: Arc<dyn CheckStoreHealthUseCase>,
}

impl HealthApi {
    pub fn new(check_health_use_case: Arc<dyn CheckStoreHealthUseCase>) -> Self {
        Self {
            check_health_use_case,
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Probes the product store and reports how many products it holds.
    /// Intended for liveness/readiness probes and load balancers.
    #[oai(path = "/products/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthCheckResponse {
        match self.check_health_use_case.execute().await {
            Ok(health) => HealthCheckResponse::Ok(Json(HealthResponse {
                status: "healthy".to_string(),
                store_reachable: health.reachable,
                product_count: health.product_count as u64,
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                HealthCheckResponse::InternalError(json)
            }
        }
    }
}

#[derive(ApiResponse)]
enum HealthCheckResponse {
    /// Store reachable
    #[oai(status = 200)]
    Ok(Json<HealthResponse>),
    /// Store probe failed
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::ProductError;
    use business::domain::product::insights::StoreHealth;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    struct StubHealth(Option<usize>);

    #[async_trait]
    impl CheckStoreHealthUseCase for StubHealth {
        async fn execute(&self) -> Result<StoreHealth, ProductError> {
            match self.0 {
                Some(product_count) => Ok(StoreHealth {
                    reachable: true,
                    product_count,
                }),
                None => Err(ProductError::Repository(RepositoryError::Unavailable)),
            }
        }
    }

    fn client(stub: StubHealth) -> TestClient<Route> {
        let api = HealthApi::new(Arc::new(stub));
        TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "0.0.0")))
    }

    #[tokio::test]
    async fn should_report_healthy_store_with_count() {
        let resp = client(StubHealth(Some(5))).get("/products/health").send().await;

        resp.assert_status_is_ok();
        let body: serde_json::Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storeReachable"], true);
        assert_eq!(body["productCount"], 5);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn should_return_500_when_store_unreachable() {
        let resp = client(StubHealth(None)).get("/products/health").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["message"], "server.internal_error");
    }
}
