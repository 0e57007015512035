//! This module provides the store that owns every task across all dates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::Task;
use crate::task::TaskId;

/// Errors returned by mutating store operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The task text was empty or whitespace-only.
    /// No id has been allocated for the rejected task.
    #[error("task text must not be empty")]
    EmptyText,
}

/// The store for every task, across all dates.
///
/// The store is the sole authority over the task collection: it allocates
/// ids, applies mutations, and reports the date-filtered view the UI should
/// display. Tasks are kept in insertion order, which is also their display
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// The next id to allocate. Strictly greater than every id ever handed
    /// out by this store, so that deleting a task can never cause its id to
    /// be reused by a later insert.
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store. The first inserted task will get id 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-seeded with a couple of sample tasks, handy for demos
    pub fn with_sample_tasks() -> Self {
        let mut store = Self::new();
        let date = NaiveDate::from_ymd_opt(2022, 7, 28)
            .unwrap(/* this cannot panic, the date is a valid constant */);
        let _clock_out = store.insert(date, "clock out".to_string())
            .unwrap(/* this cannot panic, the text is a non-empty constant */);
        let overtime = store.insert(date, "overtime".to_string())
            .unwrap(/* this cannot panic, the text is a non-empty constant */);
        store.find_mut(overtime.id())
            .unwrap(/* this cannot panic, the task was just inserted */)
            .set_done(true);
        store
    }

    /// Add a new pending task to the list of the given day.
    ///
    /// Returns a copy of the created task, so the caller can update its
    /// display state without querying the store again.
    ///
    /// Empty or whitespace-only text is rejected before an id is allocated:
    /// ids always correspond 1:1 with tasks that entered the collection.
    pub fn insert(&mut self, date: NaiveDate, text: String) -> Result<Task, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }

        let id = TaskId::from(self.next_id);
        self.next_id += 1;

        let task = Task::new(id, date, text);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// Returns the new value of the flag, or `None` if no task has this id.
    /// An unknown id is not an error: the UI only passes ids it obtained from
    /// a view, so a miss means the task is already gone.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        match self.find_mut(id) {
            Some(task) => Some(task.toggle_done()),
            None => {
                log::warn!("Cannot toggle task {}: no task has this id", id);
                None
            }
        }
    }

    /// Permanently remove the task with the given id, keeping the relative
    /// order of the remaining tasks. The removed id is never reused.
    ///
    /// Returns whether a task was actually removed. As for [`toggle`](Self::toggle),
    /// an unknown id is a no-op, not an error.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let len_before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        let removed = self.tasks.len() < len_before;
        if removed == false {
            log::warn!("Cannot delete task {}: no task has this id", id);
        }
        removed
    }

    /// Returns the tasks belonging to the given day, in insertion order.
    ///
    /// This is a snapshot of the current state, not a live view: mutating the
    /// store afterwards does not change a previously returned vector.
    ///
    /// The number of tasks for a day is the length of this view; the store
    /// keeps no separate per-day counter that could go stale.
    pub fn view(&self, date: NaiveDate) -> Vec<Task> {
        self.tasks.iter()
            .filter(|task| task.date() == date)
            .cloned()
            .collect()
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}
