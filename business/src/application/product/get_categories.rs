use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::insights::distinct_categories;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_categories::GetProductCategoriesUseCase;

pub struct GetProductCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductCategoriesUseCase for GetProductCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, ProductError> {
        self.logger.info("Listing product categories");
        let products = self.repository.get_all().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to load products for categories: {e}"));
            ProductError::Repository(e)
        })?;
        Ok(distinct_categories(&products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger, product};

    #[tokio::test]
    async fn should_list_each_category_once() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            let mut keyboard = product(3, "Mechanical Keyboard");
            keyboard.category = Some("Peripherals".to_string());
            let mut stand = product(5, "Laptop Stand");
            stand.category = None;
            Ok(vec![product(1, "Mouse"), keyboard, product(2, "Hub"), stand])
        });

        let use_case = GetProductCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(categories, vec!["Accessories", "Peripherals"]);
    }
}
