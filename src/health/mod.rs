// src/health/mod.rs
mod checker;
mod cluster;
mod evaluator;
mod hosts;
mod storage;
mod verdict;
mod version;

pub use checker::{HealthChecker, OverallReport, SystemHealth};
pub use cluster::ClusterEvaluator;
pub use evaluator::{evaluate, fetch, verdict_for, ResourceEvaluator};
pub use hosts::HostsEvaluator;
pub use storage::{unique_disks, StorageEvaluator};
pub use verdict::{Detail, HealthVerdict};
pub use version::{
    check_version, version_report, SystemVersion, VersionParseError, VersionReport, VersionStatus,
};
