//! Stateful store for task data.
//!
//! # Design
//! Owns two independent [`Signal`]s, one per query lifecycle: the paginated
//! list and the single selected task. All mutation goes through store
//! methods; consumers read snapshots or subscribe for change notification.
//! Write actions (`add_task`, `delete_task`) deliberately do not touch list
//! state — the caller refreshes the list on success — while `update_task`
//! patches the matching row in place after the server confirms.

use crate::client::TaskApiClient;
use crate::error::AppError;
use crate::http::Transport;
use crate::state::{Signal, SubscriptionId};
use crate::types::{ApiState, NewTask, PageQuery, PaginatedResult, Sort, Task};

pub struct TaskStore<T: Transport> {
    api: TaskApiClient<T>,
    tasks_state: Signal<ApiState<PaginatedResult<Task>>>,
    selected_task_state: Signal<ApiState<Task>>,
}

impl<T: Transport> TaskStore<T> {
    pub fn new(api: TaskApiClient<T>) -> Self {
        Self {
            api,
            tasks_state: Signal::new(ApiState::idle()),
            selected_task_state: Signal::new(ApiState::idle()),
        }
    }

    /// Snapshot of the paginated list state.
    pub fn tasks_state(&self) -> ApiState<PaginatedResult<Task>> {
        self.tasks_state.get()
    }

    /// Snapshot of the selected-task state.
    pub fn selected_task_state(&self) -> ApiState<Task> {
        self.selected_task_state.get()
    }

    /// Observe list-state changes.
    pub fn watch_tasks(
        &self,
        f: impl Fn(&ApiState<PaginatedResult<Task>>) + 'static,
    ) -> SubscriptionId {
        self.tasks_state.subscribe(f)
    }

    pub fn unwatch_tasks(&self, id: SubscriptionId) {
        self.tasks_state.unsubscribe(id);
    }

    /// Observe selected-task-state changes.
    pub fn watch_selected_task(&self, f: impl Fn(&ApiState<Task>) + 'static) -> SubscriptionId {
        self.selected_task_state.subscribe(f)
    }

    pub fn unwatch_selected_task(&self, id: SubscriptionId) {
        self.selected_task_state.unsubscribe(id);
    }

    /// Load one page of tasks and commit the outcome to list state.
    ///
    /// Existing data stays visible while loading (last-known-good) and also
    /// survives a failed refresh; only a success replaces it wholesale.
    pub fn load_tasks(&self, page_query: &PageQuery, sort: &Sort) {
        self.tasks_state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        match self.api.list(page_query, sort) {
            Ok(result) => self.tasks_state.set(ApiState {
                data: Some(result),
                loading: false,
                error: None,
            }),
            Err(err) => self.tasks_state.update(|state| {
                state.loading = false;
                state.error = Some(err);
            }),
        }
    }

    /// Load a single task into the selected-task state.
    ///
    /// Stale single-item data is discarded eagerly on entry, so the detail
    /// view never shows the previous task while the next one loads.
    pub fn load_task_by_id(&self, id: u64) {
        self.selected_task_state.set(ApiState {
            data: None,
            loading: true,
            error: None,
        });

        match self.api.get_by_id(id) {
            Ok(task) => self.selected_task_state.set(ApiState {
                data: Some(task),
                loading: false,
                error: None,
            }),
            Err(err) => self.selected_task_state.set(ApiState {
                data: None,
                loading: false,
                error: Some(err),
            }),
        }
    }

    /// Reset the selected-task state to idle. Useful when navigating away.
    pub fn clear_selected_task(&self) {
        self.selected_task_state.set(ApiState::idle());
    }

    /// Create a task. List state is untouched; the caller refreshes the
    /// list on success.
    pub fn add_task(&self, input: &NewTask) -> Result<Task, AppError> {
        self.api.create(input)
    }

    /// Update a task, then patch the confirmed result into the current page
    /// by id. A task outside the current page (or no loaded page at all) is
    /// a silent no-op; `total_count` is never touched.
    pub fn update_task(&self, task: &Task) -> Result<Task, AppError> {
        let updated = self.api.update(task)?;

        self.tasks_state.update(|state| {
            let Some(data) = state.data.as_mut() else {
                return;
            };
            if let Some(item) = data.items.iter_mut().find(|item| item.id == updated.id) {
                *item = updated.clone();
            }
        });
        Ok(updated)
    }

    /// Delete a task. List state is untouched; the caller refreshes the
    /// list on success.
    pub fn delete_task(&self, id: u64) -> Result<(), AppError> {
        self.api.delete(id)
    }
}
