//! Stateless resource client for the `/tasks` endpoint.
//!
//! # Design
//! `TaskApiClient` holds a base URL and a [`Transport`] and carries no other
//! state. Read operations are idempotent and retried blindly on any failure;
//! writes and deletes execute exactly once, leaving retry-on-write as a
//! caller decision. Every terminal failure is normalized into [`AppError`]
//! here, exactly once — raw transport errors never escape this boundary.

use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::mapper::to_paginated_result;
use crate::query::{api_params, to_query_string};
use crate::types::{NewTask, PageQuery, PaginatedResult, Sort, Task};

/// Additional attempts after the first failed read (3 attempts total).
pub const READ_RETRIES: u32 = 2;

/// A failure prior to normalization: either no response (status 0) or a
/// non-2xx response. `detail` is raw diagnostic text, never user-facing.
struct RawFailure {
    status: u16,
    detail: String,
}

impl RawFailure {
    fn normalize(self) -> AppError {
        AppError::from_status(self.status, &self.detail)
    }
}

/// Client for the task resource. Generic over the transport so tests can
/// inject deterministic stubs.
pub struct TaskApiClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl TaskApiClient<UreqTransport> {
    /// Client over the production ureq transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::default())
    }
}

impl<T: Transport> TaskApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    /// Fetch one page of tasks, sorted. Retries transient failures.
    pub fn list(
        &self,
        page_query: &PageQuery,
        sort: &Sort,
    ) -> Result<PaginatedResult<Task>, AppError> {
        let query = to_query_string(&api_params(page_query, sort));
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}?{query}", self.tasks_url()),
            headers: Vec::new(),
            body: None,
        };
        let response = self.execute_read(&request)?;
        Ok(to_paginated_result(&response))
    }

    /// Fetch a single task by id. Retries transient failures.
    pub fn get_by_id(&self, id: u64) -> Result<Task, AppError> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{id}", self.tasks_url()),
            headers: Vec::new(),
            body: None,
        };
        let response = self.execute_read(&request)?;
        parse_body(&response)
    }

    /// Create a task. `completed` is forced to `false` on the outgoing
    /// payload regardless of caller intent. Not retried.
    pub fn create(&self, input: &NewTask) -> Result<Task, AppError> {
        let payload = serde_json::json!({
            "title": input.title,
            "description": input.description,
            "completed": false,
        });
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.tasks_url(),
            headers: json_headers(),
            body: Some(payload.to_string()),
        };
        let response = self.execute_write(&request)?;
        parse_body(&response)
    }

    /// Full-resource replace keyed by `task.id`. Not retried.
    pub fn update(&self, task: &Task) -> Result<Task, AppError> {
        let body = serde_json::to_string(task)
            .map_err(|err| client_failure(&err.to_string()).normalize())?;
        let request = HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/{}", self.tasks_url(), task.id),
            headers: json_headers(),
            body: Some(body),
        };
        let response = self.execute_write(&request)?;
        parse_body(&response)
    }

    /// Delete a task by id. Any 2xx response (including 204 No Content) is
    /// success. Not retried.
    pub fn delete(&self, id: u64) -> Result<(), AppError> {
        let request = HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/{id}", self.tasks_url()),
            headers: Vec::new(),
            body: None,
        };
        self.execute_write(&request)?;
        Ok(())
    }

    /// One transport round-trip. Non-2xx responses and connection failures
    /// both come back as `RawFailure`, not yet normalized.
    fn attempt(&self, request: &HttpRequest) -> Result<HttpResponse, RawFailure> {
        match self.transport.execute(request) {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(RawFailure {
                status: response.status,
                detail: response.body,
            }),
            Err(err) => Err(client_failure(&err.to_string())),
        }
    }

    /// Execute an idempotent read, retrying up to [`READ_RETRIES`] extra
    /// attempts. Normalizes only the terminal failure.
    fn execute_read(&self, request: &HttpRequest) -> Result<HttpResponse, AppError> {
        let mut attempt = 0;
        loop {
            match self.attempt(request) {
                Ok(response) => return Ok(response),
                Err(failure) if attempt < READ_RETRIES => {
                    attempt += 1;
                    log::warn!(
                        "read failed (status {}), retry {attempt}/{READ_RETRIES}: {}",
                        failure.status,
                        failure.detail
                    );
                }
                Err(failure) => return Err(failure.normalize()),
            }
        }
    }

    /// Execute a non-idempotent write exactly once.
    fn execute_write(&self, request: &HttpRequest) -> Result<HttpResponse, AppError> {
        self.attempt(request).map_err(RawFailure::normalize)
    }
}

/// Client-side failures (no response, bad JSON) share the status-0 bucket.
fn client_failure(detail: &str) -> RawFailure {
    RawFailure {
        status: 0,
        detail: detail.to_string(),
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, AppError> {
    serde_json::from_str(&response.body)
        .map_err(|err| client_failure(&format!("malformed response body: {err}")).normalize())
}
