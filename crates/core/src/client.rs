use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ApiConfig, REQUEST_TIMEOUT};

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("graphql error: {0}")]
    Graphql(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("response missing data for '{0}'")]
    MissingData(String),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Thin GraphQL transport: posts `{query, variables}` and unwraps the
/// `{data, errors}` envelope down to the requested operation field.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GraphqlClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = config.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|err| ApiError::Transport(err.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Execute one operation and deserialize the field it returns under.
    pub async fn execute<T>(
        &self,
        document: &'static str,
        field: &'static str,
        variables: Value,
    ) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(field, "dashboard api request");

        let response = self
            .http
            .post(self.config.endpoint().clone())
            .json(&serde_json::json!({
                "query": document,
                "variables": variables,
            }))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(field, status = status.as_u16(), "dashboard api http failure");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .into_iter()
                .map(|err| err.message)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(field, error = %message, "dashboard api graphql failure");
            return Err(ApiError::Graphql(message));
        }

        let payload = envelope
            .data
            .and_then(|mut data| match data.get_mut(field) {
                Some(value) if !value.is_null() => Some(value.take()),
                _ => None,
            })
            .ok_or_else(|| ApiError::MissingData(field.to_string()))?;

        serde_json::from_value(payload).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_surfaces_graphql_errors() {
        let raw = r#"{"data": null, "errors": [{"message": "boom"}, {"message": "again"}]}"#;
        let envelope: Envelope = serde_json::from_str(raw).unwrap();
        let errors = envelope.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "boom");
    }

    #[test]
    fn envelope_tolerates_missing_keys() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.errors.is_none());
    }
}
