/*
[INPUT]:  Rejected store mutations
[OUTPUT]: StoreError and Result alias
[POS]:    Error handling layer for the task store
[UPDATE]: When a store operation gains a new rejection reason
*/

use thiserror::Error;

/// Errors returned by `TaskStore` mutations.
///
/// Only additions can be rejected. Operations addressing an id that is not
/// present do nothing and report the miss through their return value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A task with exactly this title is already in the list
    #[error("a task titled '{title}' already exists")]
    DuplicateTitle { title: String },
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
