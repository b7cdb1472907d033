// src/app.rs
//! Setup shared by the binary and the integration tests.

use crate::client::{default_headers, ApiClient, Credentials, ReqwestTransport, SetupError};
use crate::config::Config;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Build the API client from validated configuration. Every failure here is fatal.
pub fn build_client(config: &Config) -> Result<ApiClient> {
    let username = config
        .username
        .as_deref()
        .ok_or(SetupError::MissingCredentials("username"))?;
    let password = config
        .password
        .as_deref()
        .ok_or(SetupError::MissingCredentials("password"))?;

    let credentials = Credentials::new(username, password)?;
    debug!("Authenticating as {}", credentials.username());

    let headers = default_headers(&credentials)?;
    let transport = ReqwestTransport::new(config.timeout(), config.accept_invalid_certs)?;

    Ok(ApiClient::new(config.base_url()?, headers, Arc::new(transport)))
}
