use serde::{Deserialize, Serialize};

/// Runtime settings the host hands to the front-end at `/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the school REST API, without a trailing slash.
    pub backend_url: String,
}

impl AppConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Joins the backend URL and an API path with exactly one `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
