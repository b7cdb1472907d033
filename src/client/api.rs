// src/client/api.rs
use super::error::ApiError;
use super::transport::Transport;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

pub const SYSTEM_PATH: &str = "/rest/vxm/v1/system";
pub const CLUSTER_PATH: &str = "/rest/vxm/v1/cluster";
pub const HOSTS_PATH: &str = "/rest/vxm/v16/hosts";
pub const SUPPORT_ACCOUNT_PATH: &str = "/rest/vxm/v1/support/account";
pub const INVENTORY_HOSTS_PATH: &str = "/rest/vxm/v7/hosts";
pub const CHASSIS_PATH: &str = "/rest/vxm/v4/chassis";
pub const DISKS_PATH: &str = "/rest/vxm/v1/disks";

/// Read-only client for the VxRail Manager REST API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("headers", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: Url, headers: HeaderMap, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            headers,
            transport,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` and return the decoded JSON body.
    pub async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.base_url.join(path).map_err(|e| ApiError::Parse {
            endpoint: path.to_string(),
            reason: format!("invalid URL: {}", e),
        })?;

        let response = self
            .transport
            .get(&url, &self.headers)
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        debug!("{} returned {}", path, response.status);

        let endpoint = path.to_string();
        match response.status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED => return Err(ApiError::Unauthorized { endpoint }),
            StatusCode::FORBIDDEN => return Err(ApiError::Forbidden { endpoint }),
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound { endpoint }),
            status => {
                warn!("{} returned HTTP {}", path, status);
                return Err(ApiError::Status { endpoint, status });
            }
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse {
            endpoint,
            reason: e.to_string(),
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.get_value(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }
}
