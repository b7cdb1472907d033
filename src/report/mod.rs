// src/report/mod.rs
//! Console and JSON rendering of check results.

use crate::health::{HealthVerdict, OverallReport, VersionStatus};
use crate::inventory::Inventory;
use crate::models::{or_na, HealthComponent, SystemInfo};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

fn status_word(healthy: bool) -> &'static str {
    if healthy {
        "HEALTHY"
    } else {
        "UNHEALTHY"
    }
}

fn render_verdict<W: Write>(verdict: &HealthVerdict, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n--- {} Health ---", verdict.name)?;
    if verdict.details.is_empty() {
        writeln!(out, "  (no {} found)", verdict.name.to_lowercase())?;
    }
    for detail in &verdict.details {
        writeln!(out, "  {}: {}", detail.label, detail.detail)?;
    }
    writeln!(out, "{} status: {}", verdict.name, status_word(verdict.healthy))
}

fn render_components<W: Write>(
    components: &[HealthComponent],
    out: &mut W,
) -> std::io::Result<()> {
    if components.is_empty() {
        return Ok(());
    }
    writeln!(out, "Component health:")?;
    for component in components {
        writeln!(
            out,
            "  - {}: {}",
            component.name.as_deref().unwrap_or("Unknown"),
            or_na(&component.health)
        )?;
    }
    Ok(())
}

/// Sections per evaluator, then the summary block.
pub fn render_health_report<W: Write>(report: &OverallReport, mut out: W) -> std::io::Result<()> {
    writeln!(out, "=== VxRail Health Check ===")?;
    writeln!(out, "Endpoint: {}", report.endpoint)?;
    writeln!(
        out,
        "Checked at: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    let version = &report.version;
    let shown = version.version.as_deref().unwrap_or("unknown");
    match &version.status {
        VersionStatus::Supported => writeln!(out, "System version: {}", shown)?,
        VersionStatus::BelowMinimum => writeln!(
            out,
            "System version: {}\nWARNING: version is below the minimum supported version {}",
            shown, version.minimum
        )?,
        VersionStatus::Unknown(reason) => writeln!(
            out,
            "System version: {}\nWARNING: could not determine system version ({})",
            shown, reason
        )?,
    }

    if let Some(system) = &report.system {
        writeln!(
            out,
            "System health: {} (operational state: {})",
            or_na(&system.health),
            or_na(&system.operational_status)
        )?;
        render_components(&system.components, &mut out)?;
    }

    if let Some(support) = &report.support_status {
        writeln!(out, "Support account status: {}", support)?;
    }

    for verdict in report.verdicts() {
        render_verdict(verdict, &mut out)?;
    }

    writeln!(out, "\n=== Summary ===")?;
    for verdict in report.verdicts() {
        writeln!(
            out,
            "{:<16}{}",
            format!("{} Health:", verdict.name),
            status_word(verdict.healthy)
        )?;
    }
    writeln!(out, "{:<16}{}", "Overall Status:", status_word(report.healthy))?;
    out.flush()
}

/// System information listing followed by the raw response.
pub fn render_system_info<W: Write>(system: &SystemInfo, raw: &Value, mut out: W) -> Result<()> {
    writeln!(out, "=== VxRail System Information ===")?;
    writeln!(out, "System Version: {}", or_na(&system.version))?;
    writeln!(out, "Health Status: {}", or_na(&system.health))?;
    if let Some(status) = &system.operational_status {
        writeln!(out, "Operational Status: {}", status)?;
    }
    render_components(&system.health_components, &mut out)?;

    if let Some(cluster) = &system.cluster_info {
        writeln!(out, "\nCluster Name: {}", or_na(&cluster.cluster_name))?;
        writeln!(out, "Datacenter Name: {}", or_na(&cluster.datacenter_name))?;
        writeln!(out, "vCenter Version: {}", or_na(&cluster.vc_version))?;
    }

    if let Some(network) = &system.network {
        writeln!(out, "\nNetwork Mode: {}", or_na(&network.mode))?;
    }

    writeln!(out, "\nRaw response:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(raw)?)?;
    out.flush()?;
    Ok(())
}

/// Hosts, chassis and the disk summary of a collected inventory.
pub fn render_inventory<W: Write>(inventory: &Inventory, mut out: W) -> std::io::Result<()> {
    writeln!(out, "=== VxRail Hardware Inventory Summary ===")?;
    writeln!(
        out,
        "Inventory collected at: {}",
        inventory.collected_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    if !inventory.hosts.is_empty() {
        writeln!(out, "\nHosts:")?;
        for host in &inventory.hosts {
            writeln!(out, "\n- Host {}:", or_na(&host.host_name))?;
            writeln!(out, "  Serial Number: {}", or_na(&host.serial_number))?;
            writeln!(out, "  Model: {}", or_na(&host.model))?;
            writeln!(out, "  Management IP: {}", or_na(&host.management_ip))?;
            writeln!(out, "  Health Status: {}", or_na(&host.health))?;
        }
    }

    if !inventory.chassis.is_empty() {
        writeln!(out, "\nChassis:")?;
        for chassis in &inventory.chassis {
            let id = match &chassis.id {
                Some(Value::String(id)) => id.clone(),
                Some(id) => id.to_string(),
                None => "N/A".to_string(),
            };
            writeln!(out, "\n- Chassis {}:", id)?;
            writeln!(out, "  Serial Number: {}", or_na(&chassis.serial_number))?;
            writeln!(out, "  Model: {}", or_na(&chassis.model))?;
            writeln!(out, "  Health Status: {}", or_na(&chassis.health))?;
        }
    }

    if !inventory.disks.is_empty() {
        let summary = inventory.disk_summary();
        writeln!(out, "\nDisks Summary:")?;
        writeln!(out, "  Total number of disks: {}", summary.total)?;
        writeln!(out, "  Disk types distribution:")?;
        for (disk_type, count) in &summary.by_type {
            writeln!(out, "    - {}: {}", disk_type, count)?;
        }
        writeln!(out, "  Total raw capacity: {:.2} TB", summary.raw_capacity_tb())?;
    }

    out.flush()
}

pub fn default_inventory_path(at: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!("vxrail_inventory_{}.json", at.format("%Y%m%d_%H%M%S")))
}

/// Save any serializable result as pretty-printed JSON.
pub async fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {}", path.display());
    Ok(())
}

pub fn default_report_path(at: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!(
        "vxrail_health_report_{}.json",
        at.format("%Y%m%d_%H%M%S")
    ))
}

/// Save the health report as pretty-printed JSON.
pub async fn write_json_report(report: &OverallReport, path: &Path) -> Result<()> {
    write_json(report, path).await
}
