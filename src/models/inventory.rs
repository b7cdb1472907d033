// src/models/inventory.rs
use super::Capacity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of `/rest/vxm/v7/hosts`. Unlisted fields are kept verbatim
/// so the saved inventory is complete.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InventoryHost {
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub management_ip: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One element of `/rest/vxm/v4/chassis`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ChassisRecord {
    /// String or number depending on the API release.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One element of `/rest/vxm/v1/disks`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InventoryDisk {
    #[serde(default)]
    pub disk_type: Option<String>,
    #[serde(default)]
    pub capacity: Option<Capacity>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
