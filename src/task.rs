//! To-do tasks and their identifiers

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The identifier of a [`Task`].
///
/// Ids are allocated by the store from a strictly monotonic counter: they are
/// unique for the lifetime of the store and are never reassigned, even after
/// the task they belonged to has been deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// A to-do task, belonging to the list of a single calendar day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The store-allocated identifier of this task
    id: TaskId,

    /// The day this task belongs to (day granularity, no time component).
    /// Immutable after creation: tasks do not move between days.
    date: NaiveDate,

    /// The display text entered by the user. Immutable after creation (there is no edit operation)
    text: String,

    /// Whether this task has been completed
    done: bool,
}

impl Task {
    /// Create a pending task. Only the store creates tasks, so that ids stay under its sole authority.
    pub(crate) fn new(id: TaskId, date: NaiveDate, text: String) -> Self {
        Self {
            id,
            date,
            text,
            done: false,
        }
    }

    pub fn id(&self) -> TaskId { self.id }
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn text(&self) -> &str { &self.text }
    pub fn done(&self) -> bool { self.done }

    /// Flip the completion flag, and return its new value
    pub(crate) fn toggle_done(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}
