use chrono::{DateTime, Utc};

/// Catalog product as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// The caller-controlled fields of a product, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_available: bool,
}

impl Product {
    /// Builds a stored product from an already validated draft.
    pub fn from_draft(id: i64, draft: ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
            description: draft.description,
            category: draft.category,
            is_available: draft.is_available,
            created_at,
        }
    }

    /// Overwrites every mutable field. `id` and `created_at` are left untouched.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.stock = draft.stock;
        self.description = draft.description;
        self.category = draft.category;
        self.is_available = draft.is_available;
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
            description: self.description.clone(),
            category: self.category.clone(),
            is_available: self.is_available,
        }
    }
}
