//! Wire records returned by the VxRail Manager REST API.
//!
//! Every field is optional on the wire. Display code falls back to `N/A`;
//! a missing health or state string never counts as healthy.

mod inventory;

pub use inventory::{ChassisRecord, InventoryDisk, InventoryHost};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const HEALTHY: &str = "healthy";
pub const DISK_OK: &str = "OK";

/// `/rest/vxm/v1/system`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub operational_status: Option<String>,
    #[serde(default)]
    pub cluster_info: Option<ClusterInfo>,
    #[serde(default)]
    pub network: Option<NetworkInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub health_components: Vec<HealthComponent>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HealthComponent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
}

/// `/rest/vxm/v1/support/account`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SupportAccount {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClusterInfo {
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub datacenter_name: Option<String>,
    #[serde(default)]
    pub vc_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NetworkInfo {
    #[serde(default)]
    pub mode: Option<String>,
}

/// `/rest/vxm/v1/cluster`. Only `health` affects the verdict.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClusterRecord {
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub datacenter_name: Option<String>,
    #[serde(default)]
    pub vc_version: Option<String>,
}

/// One element of `/rest/vxm/v16/hosts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HostRecord {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub power_status: Option<String>,
    #[serde(default)]
    pub tpm_version: Option<String>,
    #[serde(default)]
    pub tpm_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub disks: Vec<DiskRecord>,
}

impl HostRecord {
    pub fn is_healthy(&self) -> bool {
        self.health.as_deref() == Some(HEALTHY)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DiskRecord {
    /// Serial number, the disk's identity across hosts.
    #[serde(default)]
    pub sn: Option<String>,
    #[serde(default)]
    pub disk_state: Option<String>,
    #[serde(default)]
    pub disk_type: Option<String>,
    #[serde(default)]
    pub disk_tier: Option<String>,
    #[serde(default)]
    pub capacity: Option<Capacity>,
}

impl DiskRecord {
    pub fn is_healthy(&self) -> bool {
        self.disk_state.as_deref() == Some(DISK_OK)
    }
}

/// Disk capacity is reported either as a number or as a preformatted string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Capacity {
    Bytes(u64),
    Fractional(f64),
    Text(String),
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bytes(n) => write!(f, "{}", n),
            Capacity::Fractional(n) => write!(f, "{}", n),
            Capacity::Text(s) => f.write_str(s),
        }
    }
}

/// Treats an explicit `null` list like a missing one.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `N/A` for absent display fields.
pub fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_list_decodes_nested_disks() {
        let json = r#"[{
            "hostname": "esx-01",
            "health": "healthy",
            "power_status": "on",
            "tpm_version": "2.0",
            "tpm_status": "enabled",
            "disks": [
                {"sn": "S1", "disk_state": "OK", "disk_type": "SSD", "disk_tier": "Cache", "capacity": 800166076416},
                {"sn": "S2", "disk_state": "OK", "capacity": "1.75 TB"}
            ]
        }, {"hostname": "esx-02"}]"#;

        let hosts: Vec<HostRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(hosts.len(), 2);
        assert!(hosts[0].is_healthy());
        assert_eq!(hosts[0].disks[0].capacity, Some(Capacity::Bytes(800166076416)));
        assert_eq!(hosts[0].disks[1].capacity.as_ref().unwrap().to_string(), "1.75 TB");
        assert!(!hosts[1].is_healthy());
        assert!(hosts[1].disks.is_empty());
    }

    #[test]
    fn test_null_disk_list_is_empty() {
        let json = r#"[{"hostname": "esx-01", "health": "healthy", "disks": null}]"#;
        let hosts: Vec<HostRecord> = serde_json::from_str(json).unwrap();
        assert!(hosts[0].is_healthy());
        assert!(hosts[0].disks.is_empty());
    }

    #[test]
    fn test_system_components() {
        let json = r#"{
            "version": "8.0.210",
            "operational_status": "normal",
            "health_components": [{"name": "vSAN", "health": "Healthy"}, {"name": "vCenter"}]
        }"#;
        let system: SystemInfo = serde_json::from_str(json).unwrap();
        assert_eq!(system.health_components.len(), 2);
        assert_eq!(or_na(&system.health_components[1].health), "N/A");

        let system: SystemInfo =
            serde_json::from_str(r#"{"health_components": null}"#).unwrap();
        assert!(system.health_components.is_empty());
    }

    #[test]
    fn test_health_match_is_exact() {
        let host = |h: &str| HostRecord {
            health: Some(h.to_string()),
            ..HostRecord::default()
        };
        assert!(host("healthy").is_healthy());
        assert!(!host("Healthy").is_healthy());
        assert!(!host("").is_healthy());

        let disk = DiskRecord {
            disk_state: Some("ok".to_string()),
            ..DiskRecord::default()
        };
        assert!(!disk.is_healthy());
    }
}
