// src/health/verdict.rs
use serde::Serialize;

/// One display line of a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub label: String,
    pub detail: String,
}

impl Detail {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

/// Health determination for one resource category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthVerdict {
    pub name: &'static str,
    pub healthy: bool,
    pub details: Vec<Detail>,
}

impl HealthVerdict {
    pub fn new(name: &'static str, healthy: bool, details: Vec<Detail>) -> Self {
        Self {
            name,
            healthy,
            details,
        }
    }

    /// Not healthy, with the failure as the only detail.
    pub fn failed(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            healthy: false,
            details: vec![Detail::new("Error", reason)],
        }
    }
}
