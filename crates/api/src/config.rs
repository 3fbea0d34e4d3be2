// Server configuration
//
// Loaded from environment variables (optionally seeded from a .env file by
// main). Unset values fall back to defaults; unparseable values fall back to
// defaults with a warning rather than aborting startup.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (HOST)
    pub host: String,
    /// TCP port (PORT)
    pub port: u16,
    /// Optional prefix nested in front of every API route (API_PREFIX)
    pub api_prefix: String,
    /// Allowed CORS origins; empty means any origin (CORS_ALLOWED_ORIGINS)
    pub cors_allowed_origins: Vec<String>,
    /// Gemini credentials; chat is disabled without them (GEMINI_API_KEY)
    pub gemini_api_key: Option<String>,
    /// Gemini model name (GEMINI_MODEL)
    pub gemini_model: String,
    /// Override for the Gemini API base URL (GEMINI_API_URL)
    pub gemini_api_url: Option<String>,
    /// Upper bound on a single assistant call (CHAT_TIMEOUT_SECS)
    pub chat_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: String::new(),
            cors_allowed_origins: Vec::new(),
            gemini_api_key: None,
            gemini_model: marquee_gemini::DEFAULT_MODEL.to_string(),
            gemini_api_url: None,
            chat_timeout: Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", non_empty("PORT"), defaults.port),
            api_prefix: non_empty("API_PREFIX")
                .map(|p| normalize_prefix(&p))
                .unwrap_or_default(),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_api_url: non_empty("GEMINI_API_URL"),
            chat_timeout: Duration::from_secs(chat_timeout_secs(non_empty("CHAT_TIMEOUT_SECS"))),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn chat_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

/// Route prefix in the form axum can nest: leading `/`, no trailing `/`.
/// A bare `/` means no prefix.
pub(crate) fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Zero would fail every chat call immediately, so it counts as invalid.
fn chat_timeout_secs(raw: Option<String>) -> u64 {
    match parse_or("CHAT_TIMEOUT_SECS", raw, DEFAULT_CHAT_TIMEOUT_SECS) {
        0 => {
            tracing::warn!(
                default = DEFAULT_CHAT_TIMEOUT_SECS,
                "CHAT_TIMEOUT_SECS must be positive, using default"
            );
            DEFAULT_CHAT_TIMEOUT_SECS
        }
        secs => secs,
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(%key, %value, error = %e, %default, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert!(config.api_prefix.is_empty());
        assert!(config.cors_allowed_origins.is_empty());
        assert!(!config.chat_enabled());
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.chat_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("CHAT_TIMEOUT_SECS", "5"),
            (
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:5173, https://tickets.example.com,",
            ),
        ]);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert!(config.chat_enabled());
        assert_eq!(config.gemini_model, "gemini-1.5-pro");
        assert_eq!(config.chat_timeout, Duration::from_secs(5));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173", "https://tickets.example.com"]
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("CHAT_TIMEOUT_SECS", "-1")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.chat_timeout, Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS));
    }

    #[test]
    fn test_zero_chat_timeout_falls_back() {
        let config = config_from(&[("CHAT_TIMEOUT_SECS", "0")]);
        assert_eq!(config.chat_timeout, Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS));
    }

    #[test]
    fn test_api_prefix_is_normalized() {
        assert_eq!(config_from(&[("API_PREFIX", "v1")]).api_prefix, "/v1");
        assert_eq!(config_from(&[("API_PREFIX", "/v1/")]).api_prefix, "/v1");
        assert_eq!(config_from(&[("API_PREFIX", "/")]).api_prefix, "");
        assert_eq!(config_from(&[("API_PREFIX", "/tickets/v2")]).api_prefix, "/tickets/v2");
    }

    #[test]
    fn test_blank_api_key_disables_chat() {
        let config = config_from(&[("GEMINI_API_KEY", "   ")]);
        assert!(!config.chat_enabled());
    }
}
