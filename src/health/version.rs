// src/health/version.rs
use crate::client::{ApiClient, ApiError, SYSTEM_PATH};
use crate::models::SystemInfo;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// `major.minor.patch`, compared component by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a major.minor.patch version")]
pub struct VersionParseError(String);

impl FromStr for SystemVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionParseError(s.to_string());

        // drop build metadata, e.g. 8.0.210-28193374
        let core = s.trim().split(['-', '+']).next().unwrap_or_default();

        let parts = core
            .split('.')
            .map(|p| p.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| err())?;

        match parts[..] {
            [major, minor, patch] => Ok(Self {
                major,
                minor,
                patch,
            }),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for SystemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{:03}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum VersionStatus {
    Supported,
    BelowMinimum,
    Unknown(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionReport {
    /// Version string exactly as reported by the appliance.
    pub version: Option<String>,
    pub minimum: String,
    pub status: VersionStatus,
}

impl VersionReport {
    /// `None` when the version could not be determined.
    pub fn below_minimum(&self) -> Option<bool> {
        match self.status {
            VersionStatus::Supported => Some(false),
            VersionStatus::BelowMinimum => Some(true),
            VersionStatus::Unknown(_) => None,
        }
    }

    pub fn classify(version: Option<String>, minimum: SystemVersion) -> Self {
        let status = match version.as_deref() {
            None => VersionStatus::Unknown("version field missing".to_string()),
            Some(raw) => match raw.parse::<SystemVersion>() {
                Ok(v) if v < minimum => VersionStatus::BelowMinimum,
                Ok(_) => VersionStatus::Supported,
                Err(e) => VersionStatus::Unknown(e.to_string()),
            },
        };

        Self {
            version,
            minimum: minimum.to_string(),
            status,
        }
    }
}

/// Classify an already fetched system record. Failures become
/// `VersionStatus::Unknown` and are logged as warnings.
pub fn version_report(
    fetched: &Result<SystemInfo, ApiError>,
    minimum: SystemVersion,
) -> VersionReport {
    let report = match fetched {
        Ok(system) => VersionReport::classify(system.version.clone(), minimum),
        Err(e) => VersionReport {
            version: None,
            minimum: minimum.to_string(),
            status: VersionStatus::Unknown(e.to_string()),
        },
    };

    match &report.status {
        VersionStatus::Supported => info!(
            "System version {} meets minimum {}",
            report.version.as_deref().unwrap_or_default(),
            report.minimum
        ),
        VersionStatus::BelowMinimum => warn!(
            "System version {} is below minimum supported version {}",
            report.version.as_deref().unwrap_or_default(),
            report.minimum
        ),
        VersionStatus::Unknown(reason) => {
            warn!("Could not determine system version: {}", reason)
        }
    }

    report
}

/// Fetch the system version and compare it with `minimum`.
///
/// Informational only: never affects a health verdict.
pub async fn check_version(client: &ApiClient, minimum: SystemVersion) -> VersionReport {
    let fetched = client.get_json::<SystemInfo>(SYSTEM_PATH).await;
    version_report(&fetched, minimum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client, FakeTransport};
    use std::sync::Arc;

    fn v(s: &str) -> SystemVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_order() {
        assert_eq!(
            v("8.0.000"),
            SystemVersion {
                major: 8,
                minor: 0,
                patch: 0
            }
        );
        assert_eq!(v("8.0.210-28193374").patch, 210);
        assert!(v("7.5.100") < v("8.0.000"));
        assert!(v("8.0.10") < v("8.0.100"));
        assert!(v("10.0.0") > v("9.9.999"));
        assert_eq!(v("8.0.000").to_string(), "8.0.000");
    }

    #[test]
    fn test_parse_rejects_non_triples() {
        assert!("8.0".parse::<SystemVersion>().is_err());
        assert!("8.0.0.1".parse::<SystemVersion>().is_err());
        assert!("eight".parse::<SystemVersion>().is_err());
        assert!("".parse::<SystemVersion>().is_err());
    }

    #[test]
    fn test_classify() {
        let min = v("8.0.000");
        let below = VersionReport::classify(Some("7.5.100".into()), min);
        assert_eq!(below.status, VersionStatus::BelowMinimum);
        assert_eq!(below.below_minimum(), Some(true));

        let equal = VersionReport::classify(Some("8.0.000".into()), min);
        assert_eq!(equal.below_minimum(), Some(false));

        let missing = VersionReport::classify(None, min);
        assert_eq!(missing.below_minimum(), None);

        let garbage = VersionReport::classify(Some("n/a".into()), min);
        assert!(matches!(garbage.status, VersionStatus::Unknown(_)));
    }

    #[tokio::test]
    async fn test_check_version_fetch_failure_is_unknown() {
        let transport = Arc::new(FakeTransport::default().respond(SYSTEM_PATH, 500, ""));
        let report = check_version(&client(transport), v("8.0.000")).await;
        assert_eq!(report.below_minimum(), None);
        assert!(report.version.is_none());
    }

    #[tokio::test]
    async fn test_check_version_reads_system_endpoint() {
        let transport = Arc::new(FakeTransport::default().respond(
            SYSTEM_PATH,
            200,
            r#"{"version": "8.0.210-28193374", "health": "Healthy"}"#,
        ));
        let report = check_version(&client(transport), v("8.0.000")).await;
        assert_eq!(report.status, VersionStatus::Supported);
        assert_eq!(report.version.as_deref(), Some("8.0.210-28193374"));
    }
}
