use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_categories::GetProductCategoriesUseCase;
use business::domain::product::use_cases::get_stats::GetProductStatsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductRequest, ProductResponse, ProductStatsResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    stats_use_case: Arc<dyn GetProductStatsUseCase>,
    categories_use_case: Arc<dyn GetProductCategoriesUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        stats_use_case: Arc<dyn GetProductStatsUseCase>,
        categories_use_case: Arc<dyn GetProductCategoriesUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            stats_use_case,
            categories_use_case,
        }
    }
}

/// Parses the raw path segment. Range checks happen in the use cases.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Validates the payload, assigns the next id and returns the stored product.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            draft: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => {
                let location = format!("/products/{}", product.id);
                CreateProductResponse::Created(Json(product.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every product ordered by name, ignoring case.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Catalog statistics
    ///
    /// Stock buckets and price figures over all products. Price fields are
    /// omitted for an empty catalog.
    #[oai(path = "/products/stats", method = "get", tag = "ApiTags::Products")]
    async fn get_product_stats(&self) -> GetProductStatsResponse {
        match self.stats_use_case.execute().await {
            Ok(stats) => GetProductStatsResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductStatsResponse::InternalError(json)
            }
        }
    }

    /// List categories
    ///
    /// Distinct, sorted category labels in use.
    #[oai(path = "/products/categories", method = "get", tag = "ApiTags::Products")]
    async fn get_product_categories(&self) -> GetProductCategoriesResponse {
        match self.categories_use_case.execute().await {
            Ok(categories) => GetProductCategoriesResponse::Ok(Json(categories)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Some(id) = parse_id(&id.0) else {
            return GetProductByIdResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductByIdResponse::BadRequest(json),
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Overwrites every mutable field. The id and creation timestamp are kept.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return UpdateProductResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };

        let params = UpdateProductParams {
            id,
            draft: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product. Its id is never handed out again.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return DeleteProductResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteProductResponse::BadRequest(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(Json(ErrorResponse::malformed_request(&err)))
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductStatsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductStatsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(Json(ErrorResponse::malformed_request(&err)))
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
