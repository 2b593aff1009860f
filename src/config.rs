// src/config.rs
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://translate.googleapis.com";
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 10_000;

// Browser identity sent on outbound calls; the public endpoint tends to
// reject clients without one.
pub const DEFAULT_PROVIDER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider_base_url: String,
    pub provider_timeout: Duration,
    pub provider_user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            provider_base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            provider_timeout: Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS),
            provider_user_agent: DEFAULT_PROVIDER_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    // Build from the environment, falling back to defaults for anything
    // unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            provider_base_url: std::env::var("PROVIDER_BASE_URL")
                .unwrap_or(defaults.provider_base_url),
            provider_timeout: std::env::var("PROVIDER_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.provider_timeout),
            provider_user_agent: std::env::var("PROVIDER_USER_AGENT")
                .unwrap_or(defaults.provider_user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.provider_timeout, Duration::from_secs(10));
        assert!(config.provider_user_agent.contains("Mozilla/5.0"));
    }
}
