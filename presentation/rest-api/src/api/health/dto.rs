use poem_openapi::Object;

/// Health check response
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct HealthResponse {
    /// "healthy" when the store answered
    pub status: String,
    pub store_reachable: bool,
    /// Number of products currently stored
    pub product_count: u64,
    /// Current server timestamp (RFC 3339)
    pub timestamp: String,
    /// Service version
    pub version: String,
}
