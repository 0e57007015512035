//! This crate provides an in-memory store for date-scoped to-do lists.
//!
//! A [`TaskStore`] owns every [`Task`] across all dates. The UI (a calendar
//! widget, a TUI, anything that can display an ordered list) picks a date,
//! asks the store for the tasks of that day with [`TaskStore::view`], and
//! forwards user actions back through [`TaskStore::insert`],
//! [`TaskStore::toggle`] and [`TaskStore::delete`].
//!
//! The store is process-local and synchronous: there is no persistence, no
//! background work, and exactly one execution context reading and writing it.

mod task;
pub use task::Task;
pub use task::TaskId;
pub mod store;
pub use store::StoreError;
pub use store::TaskStore;
