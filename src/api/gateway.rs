//! HTTP gateway to the service.
//!
//! # Responsibilities
//! - Perform one request/response exchange per call against a named endpoint
//! - Attach the API key and a per-call request id
//! - Surface transport faults and non-2xx statuses as typed errors
//!
//! # Design Decisions
//! - Built once from a validated config; the base URL never changes afterwards
//! - Mainnet is rejected here, at construction, not per-call
//! - No retries at this layer: the pollers own the retry policy

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::config::{validate_config, ClientConfig, ConfigError};
use crate::error::{Error, Result};

/// Error payload the service returns on non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Single-exchange HTTP client for the service.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: Client,
    base_url: String,
    api_key: String,
}

impl Gateway {
    /// Build a gateway from a validated configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// POST `request` to `{base}/{endpoint}` and decode the JSON response.
    pub async fn call<Req, Resp>(&self, endpoint: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, endpoint, "api call");

        let response = self
            .http
            .post(self.build_url(endpoint))
            .header("x-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            tracing::warn!(
                %request_id,
                endpoint,
                status = status.as_u16(),
                %message,
                "api call failed"
            );
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Resp>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;

    #[test]
    fn rejects_mainnet_at_construction() {
        let config = ClientConfig::new("k-123", Network::Mainnet);
        let err = Gateway::new(&config).unwrap_err();
        assert!(err.to_string().contains("mainnet"));
    }

    #[test]
    fn joins_urls_without_double_slashes() {
        let mut config = ClientConfig::new("k-123", Network::Local);
        config.endpoint_override = Some("http://127.0.0.1:8099/api/v1/".into());
        let gateway = Gateway::new(&config).unwrap();
        assert_eq!(
            gateway.build_url("/tx-status"),
            "http://127.0.0.1:8099/api/v1/tx-status"
        );
    }
}
