use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;

use super::seed::seed_drafts;

struct StoreState {
    products: BTreeMap<i64, Product>,
    /// High-water mark for id allocation. Never decreases, so ids of deleted
    /// products are not handed out again.
    next_id: i64,
}

impl StoreState {
    fn allocate_id(&mut self) -> Result<i64, RepositoryError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(RepositoryError::Persistence)?;
        Ok(id)
    }
}

/// Process-local product store keyed by id.
///
/// Reads share the lock; `create`, `update` and `delete` take the write lock
/// for their whole read-modify-write sequence.
pub struct ProductRepositoryInMemory {
    state: RwLock<StoreState>,
    latency: Duration,
}

impl ProductRepositoryInMemory {
    pub fn new(latency: Duration) -> Self {
        Self {
            state: RwLock::new(StoreState {
                products: BTreeMap::new(),
                next_id: 1,
            }),
            latency,
        }
    }

    /// Store pre-filled with the fixed seed catalog (ids 1 to 5).
    pub fn seeded(latency: Duration) -> Self {
        let now = Utc::now();
        let products: BTreeMap<i64, Product> = seed_drafts()
            .into_iter()
            .zip(1..)
            .map(|(draft, id)| (id, Product::from_draft(id, draft, now)))
            .collect();
        let next_id = products.keys().next_back().map_or(1, |max| max + 1);

        tracing::info!(count = products.len(), "Seeded in-memory product store");

        Self {
            state: RwLock::new(StoreState { products, next_id }),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.simulate_latency().await;
        let state = self.state.read().await;
        Ok(state.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.simulate_latency().await;
        let state = self.state.read().await;
        state
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        self.simulate_latency().await;
        let mut state = self.state.write().await;
        let id = state.allocate_id()?;
        let product = Product::from_draft(id, draft, Utc::now());
        state.products.insert(id, product.clone());
        tracing::debug!(id, "Inserted product");
        Ok(product)
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, RepositoryError> {
        self.simulate_latency().await;
        let mut state = self.state.write().await;
        let product = state
            .products
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        product.apply(draft);
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.simulate_latency().await;
        let mut state = self.state.write().await;
        state
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.simulate_latency().await;
        Ok(self.state.read().await.products.len())
    }
}
