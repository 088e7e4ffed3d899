//! Request/state-management core for a task-management client.
//!
//! # Overview
//! A stateless [`TaskApiClient`] issues CRUD operations against a REST
//! `/tasks` resource — pagination and sorting on reads, bounded retry for
//! idempotent operations, and normalization of every failure into a single
//! [`AppError`] shape. A stateful [`TaskStore`] sits on top, owning
//! observable [`ApiState`] values for the loaded page and the selected task
//! and applying an optimistic in-place patch after confirmed updates.
//!
//! # Design
//! - All I/O goes through the [`Transport`] trait; production uses
//!   [`UreqTransport`], tests inject stubs.
//! - The list-response contract (envelope vs. legacy header format) is
//!   isolated behind [`mapper::to_paginated_result`].
//! - State is observed through [`Signal`] snapshots and subscriptions under
//!   a single-threaded call discipline.

pub mod client;
pub mod error;
pub mod http;
pub mod mapper;
pub mod query;
pub mod state;
pub mod store;
pub mod types;

pub use client::{TaskApiClient, READ_RETRIES};
pub use error::{AppError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError, UreqTransport};
pub use state::{Signal, SubscriptionId};
pub use store::TaskStore;
pub use types::{
    ApiState, NewTask, PageQuery, PaginatedResult, Sort, SortDirection, Task, TaskField,
};
