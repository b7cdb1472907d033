// src/health/checker.rs
use super::cluster::ClusterEvaluator;
use super::evaluator::{evaluate, fetch, verdict_for};
use super::hosts::HostsEvaluator;
use super::storage::StorageEvaluator;
use super::verdict::HealthVerdict;
use super::version::{version_report, SystemVersion, VersionReport};
use crate::client::{ApiClient, SUPPORT_ACCOUNT_PATH, SYSTEM_PATH};
use crate::models::{HealthComponent, SupportAccount, SystemInfo};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct OverallReport {
    pub generated_at: DateTime<Utc>,
    pub endpoint: String,
    pub version: VersionReport,
    /// Appliance-reported system health. Informational, like the version.
    pub system: Option<SystemHealth>,
    /// Support account status, only when requested.
    pub support_status: Option<String>,
    pub cluster: HealthVerdict,
    pub hosts: HealthVerdict,
    pub storage: HealthVerdict,
    pub healthy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemHealth {
    pub health: Option<String>,
    pub operational_status: Option<String>,
    pub components: Vec<HealthComponent>,
}

impl From<&SystemInfo> for SystemHealth {
    fn from(system: &SystemInfo) -> Self {
        Self {
            health: system.health.clone(),
            operational_status: system.operational_status.clone(),
            components: system.health_components.clone(),
        }
    }
}

impl OverallReport {
    pub fn verdicts(&self) -> [&HealthVerdict; 3] {
        [&self.cluster, &self.hosts, &self.storage]
    }
}

pub struct HealthChecker {
    client: ApiClient,
    min_version: SystemVersion,
    support_status: bool,
}

impl HealthChecker {
    pub fn new(client: ApiClient, min_version: SystemVersion) -> Self {
        Self {
            client,
            min_version,
            support_status: false,
        }
    }

    /// Also query the support account (one extra request).
    pub fn with_support_status(mut self, enabled: bool) -> Self {
        self.support_status = enabled;
        self
    }

    async fn fetch_support_status(&self) -> String {
        match self.client.get_json::<SupportAccount>(SUPPORT_ACCOUNT_PATH).await {
            Ok(account) => account.status.unwrap_or_else(|| "UNKNOWN".to_string()),
            Err(e) => {
                warn!("Could not read support account: {}", e);
                "UNKNOWN".to_string()
            }
        }
    }

    /// One sequential pass: version, cluster, hosts, storage.
    ///
    /// Every evaluator runs regardless of earlier results. The host list is
    /// fetched once and shared by the hosts and storage evaluators.
    pub async fn run(&self) -> OverallReport {
        info!("Starting health check against {}", self.client.base_url());

        let system = self.client.get_json::<SystemInfo>(SYSTEM_PATH).await;
        let version = version_report(&system, self.min_version);
        let system = system.as_ref().ok().map(SystemHealth::from);

        let cluster = evaluate(&self.client, &ClusterEvaluator).await;

        let host_list = fetch::<HostsEvaluator>(&self.client).await;
        let hosts = verdict_for(&HostsEvaluator, &host_list);
        let storage = verdict_for(&StorageEvaluator, &host_list);

        let support_status = if self.support_status {
            Some(self.fetch_support_status().await)
        } else {
            None
        };

        // version, system and support status never participate
        let healthy = cluster.healthy && hosts.healthy && storage.healthy;

        if healthy {
            info!("Health check complete: system healthy");
        } else {
            warn!(
                "Health check complete: cluster={}, hosts={}, storage={}",
                cluster.healthy, hosts.healthy, storage.healthy
            );
        }

        OverallReport {
            generated_at: Utc::now(),
            endpoint: self.client.base_url().to_string(),
            version,
            system,
            support_status,
            cluster,
            hosts,
            storage,
            healthy,
        }
    }
}
