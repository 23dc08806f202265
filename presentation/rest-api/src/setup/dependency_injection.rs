use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::product::check_health::CheckStoreHealthUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_categories::GetProductCategoriesUseCaseImpl;
use business::application::product::get_stats::GetProductStatsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::store_config::StoreConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(store_config: &StoreConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::seeded(store_config.latency));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let stats_use_case = Arc::new(GetProductStatsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let categories_use_case = Arc::new(GetProductCategoriesUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let check_health_use_case = Arc::new(CheckStoreHealthUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            stats_use_case,
            categories_use_case,
        );
        let health_api = HealthApi::new(check_health_use_case);

        Self {
            health_api,
            product_api,
        }
    }
}
