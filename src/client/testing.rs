// src/client/testing.rs
use super::{ApiClient, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

/// Canned responses keyed by request path.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Result<TransportResponse, TransportError>>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            Ok(TransportResponse {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn fail(mut self, path: &str, message: &str) -> Self {
        self.responses
            .insert(path.to_string(), Err(TransportError(message.to_string())));
        self
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(
        &self,
        url: &Url,
        _headers: &HeaderMap,
    ) -> Result<TransportResponse, TransportError> {
        let path = url.path().to_string();
        self.requests.lock().unwrap().push(path.clone());
        self.responses
            .get(&path)
            .cloned()
            .unwrap_or_else(|| Err(TransportError(format!("connection refused: {}", path))))
    }
}

pub fn client(transport: Arc<FakeTransport>) -> ApiClient {
    ApiClient::new(
        Url::parse("https://vxm.test").unwrap(),
        HeaderMap::new(),
        transport,
    )
}
