// src/client/transport.rs
use super::error::{SetupError, TransportError};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The only network capability the health checks need.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<TransportResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> Result<Self, SetupError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<TransportResponse, TransportError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.as_str())
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
