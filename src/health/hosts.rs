// src/health/hosts.rs
use super::evaluator::ResourceEvaluator;
use super::verdict::{Detail, HealthVerdict};
use crate::client::HOSTS_PATH;
use crate::models::{or_na, HostRecord};

pub struct HostsEvaluator;

impl ResourceEvaluator for HostsEvaluator {
    type Resource = Vec<HostRecord>;

    const NAME: &'static str = "Hosts";
    const ENDPOINT: &'static str = HOSTS_PATH;

    fn evaluate(&self, hosts: &Vec<HostRecord>) -> HealthVerdict {
        let details = hosts
            .iter()
            .map(|host| {
                Detail::new(
                    or_na(&host.hostname),
                    format!(
                        "health={}, power={}, tpm={} ({})",
                        or_na(&host.health),
                        or_na(&host.power_status),
                        or_na(&host.tpm_version),
                        or_na(&host.tpm_status),
                    ),
                )
            })
            .collect();

        // empty list is vacuously healthy
        let healthy = hosts.iter().all(HostRecord::is_healthy);

        HealthVerdict::new(Self::NAME, healthy, details)
    }
}
