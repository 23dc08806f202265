use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::insights::StoreHealth;

#[async_trait]
pub trait CheckStoreHealthUseCase: Send + Sync {
    async fn execute(&self) -> Result<StoreHealth, ProductError>;
}
