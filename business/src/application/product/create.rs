use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.draft.name));

        if let Err(e) = params.draft.validate() {
            self.logger
                .warn(&format!("Rejected product payload: {e:?}"));
            return Err(e);
        }

        let product = self.repository.create(params.draft).await.map_err(|e| {
            self.logger.error(&format!("Failed to create product: {e}"));
            ProductError::Repository(e)
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, draft, mock_logger};
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;

    #[tokio::test]
    async fn should_create_product_when_payload_is_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|draft| Ok(Product::from_draft(6, draft, Utc::now())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(CreateProductParams {
                draft: draft("Webcam"),
            })
            .await
            .unwrap();

        assert_eq!(product.id, 6);
        assert_eq!(product.to_draft(), draft("Webcam"));
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_without_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                draft: draft(""),
            })
            .await;

        match result.unwrap_err() {
            ProductError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_surface_store_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                draft: draft("Webcam"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
