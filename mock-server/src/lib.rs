//! In-memory mock backend for the task API.
//!
//! Serves the same contract the production backend exposes: a paginated,
//! sortable `/tasks` resource with integer ids assigned from an incrementing
//! counter. List responses use the envelope format (`data`/`items`/`pages`)
//! and additionally carry an `X-Total-Count` header for legacy clients.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Body accepted by both POST (create) and PUT (full replace). An `id` in
/// the body is ignored; the path (or the id counter) is authoritative.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Paginated list envelope, mirroring json-server's v1 shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<Task>,
    /// Total number of tasks across all pages.
    pub items: usize,
    pub pages: usize,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "_page", default = "default_page")]
    pub page: usize,
    #[serde(rename = "_per_page", default = "default_per_page")]
    pub per_page: usize,
    #[serde(rename = "_sort")]
    pub sort: Option<String>,
    #[serde(rename = "_order")]
    pub order: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    10
}

#[derive(Debug, Default)]
pub struct TaskDb {
    pub tasks: BTreeMap<u64, Task>,
    pub next_id: u64,
}

pub type Db = Arc<RwLock<TaskDb>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TaskDb::default()));
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(replace_task).delete(delete_task),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Resolve the bind address for the standalone binary. Defaults to loopback
/// on port 3000 so a stray `cargo run` never exposes the mock externally.
pub fn bind_addr(host: Option<&str>, port: Option<&str>) -> String {
    format!(
        "{}:{}",
        host.unwrap_or("127.0.0.1"),
        port.unwrap_or("3000")
    )
}

async fn list_tasks(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let db = db.read().await;
    let mut tasks: Vec<Task> = db.tasks.values().cloned().collect();

    if let Some(sort) = params.sort.as_deref() {
        // A leading minus on the field name encodes descending order; the
        // explicit `_order` parameter covers clients that send it bare.
        let (field, descending) = match sort.strip_prefix('-') {
            Some(field) => (field, true),
            None => (sort, params.order.as_deref() == Some("desc")),
        };
        sort_tasks(&mut tasks, field, descending);
    }

    let total = tasks.len();
    let per_page = params.per_page.max(1);
    let pages = total.div_ceil(per_page);
    // Saturating math keeps hostile `_page` values (0, usize::MAX) from
    // panicking; out-of-range pages simply come back empty.
    let start = params.page.saturating_sub(1).saturating_mul(per_page);
    let data: Vec<Task> = tasks.into_iter().skip(start).take(per_page).collect();

    (
        [("x-total-count", total.to_string())],
        Json(PageEnvelope {
            data,
            items: total,
            pages,
        }),
    )
}

fn sort_tasks(tasks: &mut [Task], field: &str, descending: bool) {
    match field {
        "id" => tasks.sort_by_key(|t| t.id),
        "title" => tasks.sort_by(|a, b| a.title.cmp(&b.title)),
        "description" => tasks.sort_by(|a, b| a.description.cmp(&b.description)),
        "completed" => tasks.sort_by_key(|t| t.completed),
        // Unknown fields leave insertion order untouched.
        _ => {}
    }
    if descending {
        tasks.reverse();
    }
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<TaskPayload>,
) -> (StatusCode, Json<Task>) {
    let mut db = db.write().await;
    db.next_id += 1;
    let task = Task {
        id: db.next_id,
        title: input.title,
        description: input.description,
        completed: input.completed,
    };
    db.tasks.insert(task.id, task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn get_task(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Task>, StatusCode> {
    let db = db.read().await;
    db.tasks.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TaskPayload>,
) -> Result<Json<Task>, StatusCode> {
    let mut db = db.write().await;
    let task = db.tasks.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    task.title = input.title;
    task.description = input.description;
    task.completed = input.completed;
    Ok(Json(task.clone()))
}

async fn delete_task(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    db.tasks
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
