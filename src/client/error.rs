// src/client/error.rs
use reqwest::StatusCode;

/// Failure to reach the API at all (DNS, connect, TLS, timeout).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Failure of a single API request. Evaluators turn these into unhealthy
/// verdicts instead of propagating them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("transport error on {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: TransportError,
    },

    #[error("authentication failed on {endpoint}")]
    Unauthorized { endpoint: String },

    #[error("access forbidden on {endpoint}")]
    Forbidden { endpoint: String },

    #[error("endpoint not found: {endpoint}")]
    NotFound { endpoint: String },

    #[error("unexpected HTTP {status} from {endpoint}")]
    Status { endpoint: String, status: StatusCode },

    #[error("invalid response from {endpoint}: {reason}")]
    Parse { endpoint: String, reason: String },
}

/// Errors in the one-time setup phase. These are the only fatal errors.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("username must not contain ':'")]
    InvalidUsername,

    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
