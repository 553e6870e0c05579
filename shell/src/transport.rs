//! Executes the core's `HttpRequest` effects over the network.

use posts_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

/// Performs one HTTP round-trip on behalf of the core.
pub trait Transport {
    /// Non-2xx statuses are returned as responses; only a failed round-trip
    /// is an error.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a ureq agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "executing request");

        let mut call = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (name, value) in &request.headers {
            call = call.header(name.as_str(), value.as_str());
        }
        let mut response = call.call().map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
