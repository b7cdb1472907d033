// src/inventory/mod.rs
use crate::client::{ApiClient, CHASSIS_PATH, DISKS_PATH, INVENTORY_HOSTS_PATH};
use crate::models::{Capacity, ChassisRecord, InventoryDisk, InventoryHost};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Hardware inventory: hosts, chassis and disks as reported by the appliance.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    #[serde(rename = "timestamp")]
    pub collected_at: DateTime<Utc>,
    pub hosts: Vec<InventoryHost>,
    pub chassis: Vec<ChassisRecord>,
    pub disks: Vec<InventoryDisk>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskSummary {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    /// Sum of numeric capacities; text capacities are skipped.
    pub raw_capacity: f64,
}

impl DiskSummary {
    /// The disks endpoint reports capacity in KiB.
    pub fn raw_capacity_tb(&self) -> f64 {
        self.raw_capacity / (1024.0 * 1024.0 * 1024.0)
    }
}

impl Inventory {
    pub fn disk_summary(&self) -> DiskSummary {
        let mut by_type = BTreeMap::new();
        let mut raw_capacity = 0.0;

        for disk in &self.disks {
            let disk_type = disk.disk_type.clone().unwrap_or_else(|| "Unknown".to_string());
            *by_type.entry(disk_type).or_insert(0) += 1;

            match disk.capacity {
                Some(Capacity::Bytes(n)) => raw_capacity += n as f64,
                Some(Capacity::Fractional(n)) => raw_capacity += n,
                _ => {}
            }
        }

        DiskSummary {
            total: self.disks.len(),
            by_type,
            raw_capacity,
        }
    }
}

/// A failed collection leaves that section empty instead of failing the run.
async fn collect_list<T: DeserializeOwned>(client: &ApiClient, path: &str, what: &str) -> Vec<T> {
    match client.get_json::<Vec<T>>(path).await {
        Ok(items) => {
            info!("Found {} {}", items.len(), what);
            items
        }
        Err(e) => {
            warn!("Could not collect {}: {}", what, e);
            Vec::new()
        }
    }
}

/// Sequentially fetch hosts, chassis and disks.
pub async fn collect_inventory(client: &ApiClient) -> Inventory {
    let hosts = collect_list(client, INVENTORY_HOSTS_PATH, "hosts").await;
    let chassis = collect_list(client, CHASSIS_PATH, "chassis").await;
    let disks = collect_list(client, DISKS_PATH, "disks").await;

    Inventory {
        collected_at: Utc::now(),
        hosts,
        chassis,
        disks,
    }
}
