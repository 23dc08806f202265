use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};

/// Store port for catalog products.
///
/// Implementations own id allocation and the creation timestamp, and must run
/// `create`, `update` and `delete` as single atomic steps.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    async fn create(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;
    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
