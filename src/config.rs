use std::{env, time::Duration};

pub const DEFAULT_API_BASE: &str = "https://api-v2.short.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PORT: u16 = 8080;

pub const API_KEY_VAR: &str = "SHORTIO_API_KEY";
pub const DOMAIN_ID_VAR: &str = "SHORTIO_DOMAIN_ID";
pub const API_BASE_VAR: &str = "SHORTIO_API_BASE";
pub const TIMEOUT_VAR: &str = "SHORTIO_TIMEOUT_SECS";

/// Process settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: Option<String>,
    pub domain_id: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            domain_id: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Empty values
    /// count as unset and unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = read("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let timeout = read(TIMEOUT_VAR)
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        let api_base = read(API_BASE_VAR)
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            port,
            api_key: read(API_KEY_VAR),
            domain_id: read(DOMAIN_ID_VAR),
            api_base,
            timeout,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Reads an optional environment setting, treating empty values as unset.
pub fn env_setting(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
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
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.has_api_key());
        assert_eq!(config.domain_id, None);
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            (API_KEY_VAR, " sk_test "),
            (DOMAIN_ID_VAR, "12345"),
            (API_BASE_VAR, "http://127.0.0.1:4000/"),
            (TIMEOUT_VAR, "3"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_key.as_deref(), Some("sk_test"));
        assert_eq!(config.domain_id.as_deref(), Some("12345"));
        assert_eq!(config.api_base, "http://127.0.0.1:4000");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn empty_and_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            (API_KEY_VAR, ""),
            (TIMEOUT_VAR, "0"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.has_api_key());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
