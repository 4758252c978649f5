//! Task record and its open/closed lifecycle.

use super::{ArgumentError, ParseTaskStatusError, ProjectDomainError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task accepts description updates and can be closed.
    Open,
    /// Task is finished. No further mutation is accepted.
    Closed,
}

impl TaskStatus {
    /// Returns the display and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    /// Returns `true` when no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns `true` when moving from `self` to `next` is permitted.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Open, Self::Closed))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// A unit of work tracked by a [`Project`](super::Project).
///
/// `Task` is a plain value. Mutating a clone, including one taken out of a
/// project, changes only that clone; hand it back through
/// [`Project::update_task`](super::Project::update_task) to store the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
}

/// Unvalidated wire shape of a [`Task`].
#[derive(Deserialize)]
struct TaskRecord {
    id: Uuid,
    title: String,
    description: String,
    status: TaskStatus,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ProjectDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Self::new(record.id, record.title, record.description)?;
        task.status = record.status;
        Ok(task)
    }
}

impl Task {
    /// Creates an open task.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidArgument`] when `id` is nil or
    /// `title` or `description` is empty. The identifier is checked first,
    /// then the title, then the description.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let task_id = TaskId::new(id)?;
        let title_text = title.into();
        if title_text.is_empty() {
            return Err(ArgumentError::EmptyTaskTitle.into());
        }
        let description_text = description.into();
        if description_text.is_empty() {
            return Err(ArgumentError::EmptyTaskDescription.into());
        }

        Ok(Self {
            id: task_id,
            title: title_text,
            description: description_text,
            status: TaskStatus::Open,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` while the task is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::Open)
    }

    /// Replaces the description of this task value.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidArgument`] when `description` is
    /// empty, whatever the status, and [`ProjectDomainError::InvalidState`]
    /// when the task is closed. The description is unchanged on error.
    pub fn update_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), ProjectDomainError> {
        let text = description.into();
        if text.is_empty() {
            return Err(ArgumentError::EmptyTaskDescription.into());
        }
        self.ensure_open()?;
        self.description = text;
        debug!(task_id = %self.id, "task description updated");
        Ok(())
    }

    /// Moves this task value from open to closed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidState`] when the task is already
    /// closed. Closing twice is an error, not a no-op.
    pub fn close(&mut self) -> Result<(), ProjectDomainError> {
        self.transition_to(TaskStatus::Closed)?;
        debug!(task_id = %self.id, status = %self.status, "task closed");
        Ok(())
    }

    fn transition_to(&mut self, next: TaskStatus) -> Result<(), ProjectDomainError> {
        if !self.status.can_transition_to(next) {
            return Err(self.invalid_state());
        }
        self.status = next;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), ProjectDomainError> {
        if self.status.is_terminal() {
            return Err(self.invalid_state());
        }
        Ok(())
    }

    const fn invalid_state(&self) -> ProjectDomainError {
        ProjectDomainError::InvalidState {
            task_id: self.id,
            status: self.status,
        }
    }
}
