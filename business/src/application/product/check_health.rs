use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::insights::StoreHealth;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::check_health::CheckStoreHealthUseCase;

pub struct CheckStoreHealthUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckStoreHealthUseCase for CheckStoreHealthUseCaseImpl {
    async fn execute(&self) -> Result<StoreHealth, ProductError> {
        self.logger.debug("Probing product store");
        let product_count = self.repository.count().await.map_err(|e| {
            self.logger.error(&format!("Product store unreachable: {e}"));
            ProductError::Repository(e)
        })?;

        Ok(StoreHealth {
            reachable: true,
            product_count,
        })
    }
}
