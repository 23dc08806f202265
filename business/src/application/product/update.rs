use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validation::validate_id;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let id = validate_id(params.id)?;

        if let Err(e) = params.draft.validate() {
            self.logger
                .warn(&format!("Rejected update for product {id}: {e:?}"));
            return Err(e);
        }

        // The store applies the draft in place so id and created_at survive.
        let updated = self
            .repository
            .update(id, params.draft)
            .await
            .map_err(|e| {
                let error = ProductError::from_lookup(e);
                if let ProductError::Repository(inner) = &error {
                    self.logger
                        .error(&format!("Failed to update product {id}: {inner}"));
                }
                error
            })?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
