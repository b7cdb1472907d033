// src/health/cluster.rs
use super::evaluator::ResourceEvaluator;
use super::verdict::{Detail, HealthVerdict};
use crate::client::CLUSTER_PATH;
use crate::models::{or_na, ClusterRecord, HEALTHY};

pub struct ClusterEvaluator;

impl ResourceEvaluator for ClusterEvaluator {
    type Resource = ClusterRecord;

    const NAME: &'static str = "Cluster";
    const ENDPOINT: &'static str = CLUSTER_PATH;

    fn evaluate(&self, cluster: &ClusterRecord) -> HealthVerdict {
        // name, datacenter and vCenter version are display only
        let details = vec![
            Detail::new("Cluster Name", or_na(&cluster.cluster_name)),
            Detail::new("Datacenter", or_na(&cluster.datacenter_name)),
            Detail::new("vCenter Version", or_na(&cluster.vc_version)),
            Detail::new("Health", or_na(&cluster.health)),
        ];

        HealthVerdict::new(
            Self::NAME,
            cluster.health.as_deref() == Some(HEALTHY),
            details,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(health: Option<&str>) -> ClusterRecord {
        ClusterRecord {
            health: health.map(str::to_string),
            cluster_name: Some("VxRail-Virtual-SAN-Cluster".to_string()),
            ..ClusterRecord::default()
        }
    }

    #[test]
    fn test_only_exact_healthy_passes() {
        assert!(ClusterEvaluator.evaluate(&cluster(Some("healthy"))).healthy);

        for value in [Some("Healthy"), Some("degraded"), Some(""), None] {
            assert!(
                !ClusterEvaluator.evaluate(&cluster(value)).healthy,
                "{:?} must not be healthy",
                value
            );
        }
    }

    #[test]
    fn test_details_include_metadata() {
        let verdict = ClusterEvaluator.evaluate(&cluster(Some("healthy")));
        assert_eq!(verdict.details[0].detail, "VxRail-Virtual-SAN-Cluster");
        assert_eq!(verdict.details[1].detail, "N/A");
    }
}
