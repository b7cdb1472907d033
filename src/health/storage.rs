// src/health/storage.rs
use super::evaluator::ResourceEvaluator;
use super::verdict::{Detail, HealthVerdict};
use crate::client::HOSTS_PATH;
use crate::models::{or_na, DiskRecord, HostRecord};
use std::collections::HashSet;

/// Disk health, read from the disks nested in the host list.
pub struct StorageEvaluator;

/// Disks across all hosts in fetch order, keeping the first occurrence of
/// each serial number. Disks without a serial are never merged.
pub fn unique_disks(hosts: &[HostRecord]) -> Vec<&DiskRecord> {
    let mut seen = HashSet::new();

    hosts
        .iter()
        .flat_map(|host| host.disks.iter())
        .filter(|disk| match disk.sn.as_deref() {
            Some(sn) => seen.insert(sn),
            None => true,
        })
        .collect()
}

impl ResourceEvaluator for StorageEvaluator {
    type Resource = Vec<HostRecord>;

    const NAME: &'static str = "Storage";
    const ENDPOINT: &'static str = HOSTS_PATH;

    fn evaluate(&self, hosts: &Vec<HostRecord>) -> HealthVerdict {
        let disks = unique_disks(hosts);

        let details = disks
            .iter()
            .map(|disk| {
                Detail::new(
                    or_na(&disk.sn),
                    format!(
                        "state={}, type={}, tier={}, capacity={}",
                        or_na(&disk.disk_state),
                        or_na(&disk.disk_type),
                        or_na(&disk.disk_tier),
                        disk.capacity
                            .as_ref()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "N/A".to_string()),
                    ),
                )
            })
            .collect();

        let healthy = disks.iter().all(|disk| disk.is_healthy());

        HealthVerdict::new(Self::NAME, healthy, details)
    }
}
