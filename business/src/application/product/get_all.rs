use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::insights::sort_by_name;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let mut products = self.repository.get_all().await.map_err(|e| {
            self.logger.error(&format!("Failed to list products: {e}"));
            ProductError::Repository(e)
        })?;
        sort_by_name(&mut products);
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
