//! Runtime configuration of the front-end.
//!
//! The host serves `/config.json`; when the page is served some other way
//! (for instance by `trunk serve` during development) the compile-time
//! `BACKEND_URL` or a local default is used instead.

use common::model::config::AppConfig;
use gloo_net::http::Request;

pub const CONFIG_PATH: &str = "/config.json";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

/// Storage key under which the auth flow leaves the bearer token.
pub const SESSION_TOKEN_KEY: &str = "sessionToken";

pub fn fallback() -> AppConfig {
    AppConfig::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
}

pub async fn load() -> AppConfig {
    match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => match resp.json::<AppConfig>().await {
            Ok(config) => AppConfig::new(config.backend_url),
            Err(err) => {
                gloo_console::error!(format!("Invalid {}: {}", CONFIG_PATH, err));
                fallback()
            }
        },
        Ok(resp) => {
            gloo_console::warn!(format!(
                "{} answered {}, using {}",
                CONFIG_PATH,
                resp.status(),
                fallback().backend_url
            ));
            fallback()
        }
        Err(err) => {
            gloo_console::warn!(format!("Could not load {}: {}", CONFIG_PATH, err));
            fallback()
        }
    }
}
