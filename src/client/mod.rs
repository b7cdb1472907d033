// src/client/mod.rs
mod api;
mod auth;
mod error;
mod transport;

pub use api::{
    ApiClient, CHASSIS_PATH, CLUSTER_PATH, DISKS_PATH, HOSTS_PATH, INVENTORY_HOSTS_PATH,
    SUPPORT_ACCOUNT_PATH, SYSTEM_PATH,
};
pub use auth::{default_headers, Credentials};
pub use error::{ApiError, SetupError, TransportError};
pub use transport::{ReqwestTransport, Transport, TransportResponse};

#[cfg(test)]
pub(crate) mod testing;
