use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::insights::{ProductStats, compute_stats};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_stats::GetProductStatsUseCase;

pub struct GetProductStatsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductStatsUseCase for GetProductStatsUseCaseImpl {
    async fn execute(&self) -> Result<ProductStats, ProductError> {
        self.logger.info("Computing product statistics");
        let products = self.repository.get_all().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to load products for stats: {e}"));
            ProductError::Repository(e)
        })?;
        Ok(compute_stats(&products))
    }
}
