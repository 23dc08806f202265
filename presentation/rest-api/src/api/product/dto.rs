use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::insights::ProductStats;
use business::domain::product::model::{Product, ProductDraft};

fn default_available() -> bool {
    true
}

/// Payload for creating or replacing a product.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name (1-100 characters, not blank)
    pub name: String,
    /// Unit price, greater than 0.01 and at most 999999.99
    pub price: f64,
    /// Units in stock (0 or more)
    #[oai(default)]
    pub stock: i32,
    /// Free-form description (up to 500 characters)
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Category label (up to 50 characters)
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Whether the product can be ordered
    #[oai(default = "default_available")]
    pub is_available: bool,
}

impl From<ProductRequest> for ProductDraft {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            stock: request.stock,
            description: request.description,
            category: request.category,
            is_available: request.is_available,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub is_available: bool,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            description: product.description,
            category: product.category,
            is_available: product.is_available,
            created_at: product.created_at,
        }
    }
}

/// Aggregate stock and price figures over the whole catalog.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductStatsResponse {
    pub total_products: u64,
    /// Products with at least one unit
    pub in_stock: u64,
    /// Products with 1 to 5 units
    pub low_stock: u64,
    pub out_of_stock: u64,
    /// Omitted when the catalog is empty
    #[oai(skip_serializing_if_is_none)]
    pub min_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub max_price: Option<f64>,
    /// Rounded to two decimals
    #[oai(skip_serializing_if_is_none)]
    pub average_price: Option<f64>,
}

impl From<ProductStats> for ProductStatsResponse {
    fn from(stats: ProductStats) -> Self {
        Self {
            total_products: stats.total_products as u64,
            in_stock: stats.in_stock as u64,
            low_stock: stats.low_stock as u64,
            out_of_stock: stats.out_of_stock as u64,
            min_price: stats.min_price,
            max_price: stats.max_price,
            average_price: stats.average_price,
        }
    }
}
