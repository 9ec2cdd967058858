//! Host settings, read from the environment at start-up.
//!
//! | variable       | default                 |
//! |----------------|-------------------------|
//! | `HOST`         | `127.0.0.1`             |
//! | `PORT`         | `8080`                  |
//! | `BACKEND_URL`  | `http://localhost:4000` |
//! | `OPEN_BROWSER` | `true`                  |

use common::model::config::AppConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got `{0}`")]
    InvalidPort(String),
    #[error("BACKEND_URL must start with http:// or https://, got `{0}`")]
    InvalidBackendUrl(String),
    #[error("OPEN_BROWSER must be true or false, got `{0}`")]
    InvalidFlag(String),
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub app: AppConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let backend_url = var("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }

        let open_browser = match var("OPEN_BROWSER").as_deref().map(str::trim) {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => return Err(ConfigError::InvalidFlag(other.to_string())),
        };

        Ok(Self {
            host,
            port,
            open_browser,
            app: AppConfig::new(backend_url),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
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
    fn defaults_apply_when_unset() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.app.backend_url, "http://localhost:4000");
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_read_and_trimmed() {
        let config = HostConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("BACKEND_URL", "https://api.school.test/"),
            ("OPEN_BROWSER", "false"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
        assert_eq!(config.app.backend_url, "https://api.school.test");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("PORT", "http")])),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("PORT", "0")])),
            Err(ConfigError::InvalidPort("0".into()))
        );
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("BACKEND_URL", "api.school.test")])),
            Err(ConfigError::InvalidBackendUrl("api.school.test".into()))
        );
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("OPEN_BROWSER", "maybe")])),
            Err(ConfigError::InvalidFlag("maybe".into()))
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = HostConfig::from_lookup(lookup(&[("PORT", " "), ("HOST", "")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }
}
