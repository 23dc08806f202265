use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load client configuration from environment variables
    ///
    /// Environment variables:
    /// - API_BASE_URL: Root URL of the catalog API (default: "http://127.0.0.1:8080")
    /// - API_TIMEOUT_SECONDS: Default per-request timeout (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = parse_timeout(env::var("API_TIMEOUT_SECONDS").ok().as_deref());
        Self::new(base_url).with_timeout(timeout)
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    match raw.map(|value| value.trim().parse::<u64>()) {
        None => DEFAULT_TIMEOUT,
        Some(Ok(seconds)) if seconds > 0 => Duration::from_secs(seconds),
        Some(_) => {
            tracing::warn!(
                value = raw.unwrap_or_default(),
                "Invalid API_TIMEOUT_SECONDS, using default"
            );
            DEFAULT_TIMEOUT
        }
    }
}
