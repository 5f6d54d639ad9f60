//! HTTP client for the backend API
//!
//! Thin typed wrapper over reqwest. Every transport or HTTP-level failure
//! maps to `DemandasError::Network`; there is no automatic retry.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::{DemandasError, Result};
use crate::schemas::Config;

/// Typed client for the demandas backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the resolved configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = if body.is_empty() {
            status.to_string()
        } else {
            format!("{}: {}", status, body)
        };
        Err(DemandasError::Network(detail))
    }

    /// GET a JSON resource
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = Self::check(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Send a JSON body and decode a JSON response
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(%url, method = %method, "request");
        let response = self.http.request(method, &url).json(body).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Send a JSON body and ignore the response body (e.g. `PUT` with no
    /// content)
    pub(crate) async fn send_json_no_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let url = self.url(path);
        debug!(%url, method = %method, "request");
        let response = self.http.request(method, &url).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// True for responses that indicate a missing resource
pub fn is_not_found(error: &DemandasError) -> bool {
    match error {
        DemandasError::Network(message) => {
            message.starts_with(&StatusCode::NOT_FOUND.to_string())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = Config {
            base_url: "http://localhost:5000/api/".to_string(),
            ..Config::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/demands"), "http://localhost:5000/api/demands");
    }

    #[test]
    fn test_is_not_found() {
        assert!(is_not_found(&DemandasError::Network("404 Not Found".to_string())));
        assert!(!is_not_found(&DemandasError::Network("500 Internal Server Error".to_string())));
        assert!(!is_not_found(&DemandasError::MissingNote));
    }
}
