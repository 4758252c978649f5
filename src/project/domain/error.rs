//! Error types for project and task validation and lifecycle rules.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned by project and task operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// An input failed validation before any state was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// The project already holds a task with this identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateId(TaskId),

    /// The project holds no task with this identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task's status does not permit the requested mutation.
    #[error("task {task_id} is {status}: closed task")]
    InvalidState {
        /// Task that rejected the mutation.
        task_id: TaskId,
        /// Status the task was in at the time.
        status: TaskStatus,
    },
}

impl ProjectDomainError {
    /// Returns the coarse error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::DuplicateId(_) => ErrorKind::DuplicateId,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }
}

/// Coarse classification of [`ProjectDomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Nil identifier or empty text field.
    InvalidArgument,
    /// Identifier collision on insert.
    DuplicateId,
    /// Identifier absent on update.
    NotFound,
    /// Mutation of a closed task.
    InvalidState,
}

/// Validation failures for constructor and mutator inputs.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum ArgumentError {
    /// The project identifier is the nil UUID.
    #[error("project identifier must not be nil")]
    NilProjectId,

    /// The task identifier is the nil UUID.
    #[error("task identifier must not be nil")]
    NilTaskId,

    /// The project name is empty.
    #[error("project name cannot be empty")]
    EmptyProjectName,

    /// The task title is empty.
    #[error("task title cannot be empty")]
    EmptyTaskTitle,

    /// The task description is empty.
    #[error("task description cannot be empty")]
    EmptyTaskDescription,
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
