//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data with owned fields, so the rest of
//! the crate stays free of any particular HTTP library. The [`Transport`]
//! trait is the single I/O seam: [`UreqTransport`] executes requests over
//! the network in production, and tests inject deterministic stubs to
//! exercise retry and payload behavior without sockets.

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data. Non-2xx statuses are carried
/// here as ordinary responses, not transport errors.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A failure below the HTTP layer: the request never produced a response.
/// Normalizes to status 0.
#[derive(Debug, Clone, Error)]
#[error("connection failed: {0}")]
pub struct TransportError(pub String);

/// Executes an [`HttpRequest`] and returns the resulting [`HttpResponse`].
///
/// Implementations must return `Ok` for any response the server produced,
/// whatever its status; `Err` is reserved for connection-level failures.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a [`ureq::Agent`].
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        // Status-as-error is disabled so 4xx/5xx come back as data and the
        // client layer owns status interpretation.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.url).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.url).send_empty(),
        };

        let mut response = result.map_err(|err| TransportError(err.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
