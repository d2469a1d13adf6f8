use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

static DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";
static ENV_API_URL: &str = "TASKDECK_API_URL";
static ENV_API_TOKEN: &str = "TASKDECK_API_TOKEN";

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    endpoint: Url,
    token: Option<String>,
    page_size: u32,
}

impl ApiConfig {
    /// Construct [`ApiConfig`] by resolving the endpoint and token using the
    /// provided overrides, environment variables, and defaults.
    pub fn discover(endpoint_override: Option<String>, token_override: Option<String>) -> Result<Self> {
        let raw = resolve_endpoint(endpoint_override);
        let endpoint = Url::parse(&raw)
            .with_context(|| format!("Invalid dashboard API endpoint '{}'", raw))?;
        let token = token_override.or_else(|| env::var(ENV_API_TOKEN).ok());
        Ok(Self {
            endpoint,
            token,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

fn resolve_endpoint(endpoint_override: Option<String>) -> String {
    if let Some(url) = endpoint_override {
        return url;
    }

    if let Ok(url) = env::var(ENV_API_URL) {
        return url;
    }

    DEFAULT_ENDPOINT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_default() {
        let config =
            ApiConfig::discover(Some("https://api.example.test/graphql".into()), None).unwrap();
        assert_eq!(
            config.endpoint().as_str(),
            "https://api.example.test/graphql"
        );
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        assert!(ApiConfig::discover(Some("not a url".into()), None).is_err());
    }

    #[test]
    fn page_size_never_drops_to_zero() {
        let config = ApiConfig::discover(Some("http://localhost:4000/graphql".into()), None)
            .unwrap()
            .with_page_size(0);
        assert_eq!(config.page_size(), 1);
    }
}
