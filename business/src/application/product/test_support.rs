use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
        async fn create(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;
        async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        async fn count(&self) -> Result<usize, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: 19.99,
        stock: 10,
        description: None,
        category: Some("Accessories".to_string()),
        is_available: true,
    }
}

pub fn product(id: i64, name: &str) -> Product {
    product_created_at(id, name, Utc::now())
}

pub fn product_created_at(id: i64, name: &str, created_at: DateTime<Utc>) -> Product {
    Product::from_draft(id, draft(name), created_at)
}
