//! Client side of the catalog API.
//!
//! Every call goes through [`ApiClient`], which never panics and never leaks a
//! transport error: the outcome is always an [`ApiResult`].

mod case_insensitive;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod products;

pub use config::ApiClientConfig;
pub use error::{ApiError, ApiResult, ErrorCode, ErrorContext, FailureDetail};
pub use pipeline::{ApiClient, ApiRequest};
pub use products::ProductsClient;
