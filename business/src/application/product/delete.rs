use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::validation::validate_id;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let id = validate_id(params.id)?;

        self.repository.delete(id).await.map_err(|e| {
            let error = ProductError::from_lookup(e);
            if let ProductError::Repository(inner) = &error {
                self.logger
                    .error(&format!("Failed to delete product {id}: {inner}"));
            }
            error
        })?;

        self.logger.info(&format!("Product deleted: {id}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger};
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 3 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 77 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_non_positive_id_without_touching_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: -4 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidId));
    }
}
