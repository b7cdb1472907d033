// src/health/evaluator.rs
use super::verdict::HealthVerdict;
use crate::client::{ApiClient, ApiError};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Reduces one fetched API resource to a [`HealthVerdict`].
pub trait ResourceEvaluator {
    /// Decoded shape of the endpoint's body.
    type Resource: DeserializeOwned;

    const NAME: &'static str;
    const ENDPOINT: &'static str;

    fn evaluate(&self, resource: &Self::Resource) -> HealthVerdict;
}

/// Apply `evaluator` to a fetch result. A failed fetch becomes an unhealthy
/// verdict carrying the error; it never propagates.
pub fn verdict_for<E: ResourceEvaluator>(
    evaluator: &E,
    fetched: &Result<E::Resource, ApiError>,
) -> HealthVerdict {
    let verdict = match fetched {
        Ok(resource) => evaluator.evaluate(resource),
        Err(e) => {
            warn!("{} check failed: {}", E::NAME, e);
            HealthVerdict::failed(E::NAME, e.to_string())
        }
    };

    debug!("{} healthy={}", E::NAME, verdict.healthy);
    verdict
}

pub async fn fetch<E: ResourceEvaluator>(client: &ApiClient) -> Result<E::Resource, ApiError> {
    client.get_json(E::ENDPOINT).await
}

/// Fetch the evaluator's endpoint and evaluate it.
pub async fn evaluate<E: ResourceEvaluator>(client: &ApiClient, evaluator: &E) -> HealthVerdict {
    let fetched = fetch::<E>(client).await;
    verdict_for(evaluator, &fetched)
}
