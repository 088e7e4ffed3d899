//! Domain model and state shapes for the task API client.
//!
//! # Design
//! These types mirror the server's schema but are defined independently from
//! the mock-server crate; integration tests catch schema drift. State shapes
//! (`ApiState`, `PaginatedResult`) are plain owned data so snapshots can be
//! handed to observers without lifetime concerns.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single task as stored on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Payload for creating a task. Excludes `id` (server-assigned) and
/// `completed` (forced to `false` by the client on creation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

/// Pagination parameters for a list request. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

/// A sortable field of [`Task`], with its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Id,
    Title,
    Description,
    Completed,
}

impl TaskField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Id => "id",
            TaskField::Title => "title",
            TaskField::Description => "description",
            TaskField::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort order for a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub property: TaskField,
    pub direction: SortDirection,
}

/// One page of results plus the server-reported total across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> PaginatedResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// The state of one in-flight-or-settled asynchronous query.
///
/// Invariants maintained by [`crate::store::TaskStore`]: entering the loading
/// phase clears `error`; a success clears `error` and sets `data`; a failure
/// sets `error` and leaves the previous `data` as last-known-good (list
/// state) or `None` (selected-task state, which discards stale data eagerly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<AppError>,
}

impl<T> ApiState<T> {
    /// The idle state: no data, not loading, no error.
    pub fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> Default for ApiState<T> {
    fn default() -> Self {
        Self::idle()
    }
}
