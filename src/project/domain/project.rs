//! Project aggregate root.

use super::{ArgumentError, ProjectDomainError, ProjectId, Task, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A named, ordered collection of tasks.
///
/// Tasks are held by value. Accessors hand out shared references or clones,
/// never a mutable handle into storage, so a task mutated outside the project
/// must be written back with [`Project::update_task`].
///
/// `Project` carries no internal synchronization; callers sharing one across
/// threads wrap the whole aggregate, e.g. in a `Mutex<Project>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    name: String,
    tasks: Vec<Task>,
}

/// Unvalidated wire shape of a [`Project`].
#[derive(Deserialize)]
struct ProjectRecord {
    id: Uuid,
    name: String,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectDomainError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let mut project = Self::new(record.id, record.name)?;
        for task in record.tasks {
            project.add_task(task)?;
        }
        Ok(project)
    }
}

impl Project {
    /// Creates a project with no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidArgument`] when `id` is nil or
    /// `name` is empty.
    pub fn new(id: Uuid, name: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let project_id = ProjectId::new(id)?;
        let project_name = name.into();
        if project_name.is_empty() {
            return Err(ArgumentError::EmptyProjectName.into());
        }

        Ok(Self {
            id: project_id,
            name: project_name,
            tasks: Vec::new(),
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the project holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateId`] when a task with the same
    /// identifier is already present. The task list is unchanged on error.
    pub fn add_task(&mut self, task: Task) -> Result<(), ProjectDomainError> {
        let task_id = task.id();
        if self.task(task_id).is_some() {
            debug!(project_id = %self.id, %task_id, "rejected duplicate task");
            return Err(ProjectDomainError::DuplicateId(task_id));
        }
        self.tasks.push(task);
        debug!(project_id = %self.id, %task_id, "task added");
        Ok(())
    }

    /// Replaces the stored task that shares `task`'s identifier.
    ///
    /// This is a full-record replace, status included, at the task's original
    /// position. Pass the complete desired state.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] when no stored task has the
    /// identifier. The task list is unchanged on error.
    pub fn update_task(&mut self, task: Task) -> Result<(), ProjectDomainError> {
        let task_id = task.id();
        let Some(slot) = self.tasks.iter_mut().find(|stored| stored.id() == task_id) else {
            debug!(project_id = %self.id, %task_id, "update for unknown task");
            return Err(ProjectDomainError::NotFound(task_id));
        };
        *slot = task;
        debug!(project_id = %self.id, %task_id, status = %slot.status(), "task replaced");
        Ok(())
    }

    /// Returns clones of every task with `status`, in original order.
    #[must_use]
    pub fn filter_tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect()
    }
}
