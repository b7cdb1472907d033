// src/client/auth.rs
use super::error::SetupError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::fmt;

/// Basic-auth credentials. Held in memory for one run only.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Result<Self, SetupError> {
        let username = username.into();
        if username.is_empty() {
            return Err(SetupError::EmptyUsername);
        }
        // RFC 7617: the user-id cannot contain a colon
        if username.contains(':') {
            return Err(SetupError::InvalidUsername);
        }

        Ok(Self {
            username,
            secret: secret.into(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn authorization_header(&self) -> Result<HeaderValue, SetupError> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.secret));
        let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Headers sent with every request.
pub fn default_headers(credentials: &Credentials) -> Result<HeaderMap, SetupError> {
    let json = HeaderValue::from_static("application/json");

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, credentials.authorization_header()?);
    headers.insert(ACCEPT, json.clone());
    headers.insert(CONTENT_TYPE, json);
    Ok(headers)
}
