// src/config/models.rs
use crate::health::SystemVersion;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_MIN_VERSION: &str = "8.0.000";

#[derive(Clone, Deserialize)]
pub struct Config {
    /// VxRail Manager address, a bare host name or an origin URL.
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_min_version")]
    pub min_version: String,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_min_version() -> String {
    DEFAULT_MIN_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: None,
            password: None,
            min_version: default_min_version(),
            accept_invalid_certs: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("VxRail Manager host must be set");
        }

        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }

        self.min_version()?;
        self.base_url()?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn min_version(&self) -> Result<SystemVersion> {
        self.min_version
            .parse()
            .with_context(|| format!("Invalid min_version '{}'", self.min_version))
    }

    /// `https://<host>` unless the host already names a scheme. Only an
    /// origin is accepted.
    pub fn base_url(&self) -> Result<Url> {
        let host = self.host.trim().trim_end_matches('/');
        let raw = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };

        let url = Url::parse(&raw)
            .with_context(|| format!("Invalid VxRail Manager address '{}'", self.host))?;

        // endpoint paths are absolute, a prefix here would be silently dropped
        if url.path() != "/" || url.query().is_some() {
            bail!(
                "VxRail Manager address '{}' must not include a path; give the host or origin only",
                self.host
            );
        }

        Ok(url)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("min_version", &self.min_version)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> Config {
        Config {
            host: host.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_base_url_defaults_to_https() {
        let url = config("vxm.lab.local").base_url().unwrap();
        assert_eq!(url.as_str(), "https://vxm.lab.local/");
    }

    #[test]
    fn test_base_url_keeps_explicit_scheme() {
        let url = config("http://127.0.0.1:8443/").base_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8443/");
    }

    #[test]
    fn test_base_url_rejects_path_prefix() {
        assert!(config("https://gw.lab/vxm/").base_url().is_err());
        assert!(config("gw.lab/vxm").validate().is_err());
        assert!(config("https://gw.lab/?x=1").validate().is_err());
        assert!(config("https://gw.lab:8443/").validate().is_ok());
    }

    #[test]
    fn test_validate_requires_host() {
        assert!(config("  ").validate().is_err());
        assert!(config("vxm").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut cfg = config("vxm");
        cfg.password = Some("hunter2".to_string());
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
