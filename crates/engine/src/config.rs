//! Engine configuration from environment variables.

use std::time::Duration;

pub const DEFAULT_OPUS_API_BASE: &str = "https://operator.opus.com";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub opus_api_base: String,
    /// Sent upstream as `x-service-key`
    pub opus_api_key: String,
    pub server_host: String,
    pub server_port: u16,
    /// `*` or a comma-separated origin list; unset disables CORS
    pub cors_allowed_origins: Option<String>,
    pub opus_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let opus_api_key = get("OPUS_API_KEY").ok_or(ConfigError::Missing("OPUS_API_KEY"))?;
        let server_port = get("SERVER_PORT")
            .or_else(|| get("PORT"))
            .map(|raw| parse_or("SERVER_PORT", &raw, DEFAULT_PORT))
            .unwrap_or(DEFAULT_PORT);
        let timeout_secs = get("OPUS_HTTP_TIMEOUT_SECS")
            .map(|raw| parse_or("OPUS_HTTP_TIMEOUT_SECS", &raw, DEFAULT_TIMEOUT_SECS))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let max_upload_bytes = get("MAX_UPLOAD_BYTES")
            .map(|raw| parse_or("MAX_UPLOAD_BYTES", &raw, DEFAULT_MAX_UPLOAD_BYTES))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self {
            opus_api_base: get("OPUS_API_BASE")
                .unwrap_or_else(|| DEFAULT_OPUS_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            opus_api_key,
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
            opus_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, raw: &str, default: T) -> T {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(variable = name, value = raw, default = %default, "Invalid number, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_requires_service_key() {
        let err = EngineConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "OPUS_API_KEY must be set");

        let blank = EngineConfig::from_lookup(lookup(&[("OPUS_API_KEY", "  ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[("OPUS_API_KEY", "secret")])).unwrap();
        assert_eq!(config.opus_api_base, DEFAULT_OPUS_API_BASE);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.cors_allowed_origins, None);
        assert_eq!(config.opus_timeout, Duration::from_secs(60));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("OPUS_API_KEY", "secret"),
            ("OPUS_API_BASE", "http://opus.local/api/"),
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", "*"),
            ("OPUS_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.opus_api_base, "http://opus.local/api");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cors_allowed_origins.as_deref(), Some("*"));
        assert_eq!(config.opus_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_number_falls_back() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("OPUS_API_KEY", "secret"),
            ("SERVER_PORT", "eighty"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 3000);
    }
}
