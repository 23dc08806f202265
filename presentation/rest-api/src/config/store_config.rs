use std::env;
use std::time::Duration;

/// Settings for the in-memory product store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Artificial delay applied to every store operation.
    pub latency: Duration,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - STORE_LATENCY_MS: Simulated latency per store call in milliseconds (default: 0)
    pub fn from_env() -> Self {
        Self {
            latency: parse_latency(env::var("STORE_LATENCY_MS").ok().as_deref()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }
}

fn parse_latency(raw: Option<&str>) -> Duration {
    let Some(value) = raw else {
        return Duration::ZERO;
    };
    match value.trim().parse::<u64>() {
        Ok(millis) => Duration::from_millis(millis),
        Err(_) => {
            tracing::warn!(value, "Invalid STORE_LATENCY_MS, store latency disabled");
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_latency_in_milliseconds() {
        assert_eq!(parse_latency(Some("250")), Duration::from_millis(250));
        assert_eq!(parse_latency(None), Duration::ZERO);
    }

    #[test]
    fn should_disable_latency_when_value_is_invalid() {
        assert_eq!(parse_latency(Some("-5")), Duration::ZERO);
        assert_eq!(parse_latency(Some("fast")), Duration::ZERO);
    }
}
