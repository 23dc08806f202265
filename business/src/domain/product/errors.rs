use crate::domain::errors::RepositoryError;

use super::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.validation_failed")]
    Validation(Vec<FieldViolation>),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository failure from an id-addressed operation, turning a
    /// missing row into `ProductError::NotFound`.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
