//! Shared world state for project task tracking BDD scenarios.

use std::collections::HashMap;

use rstest::fixture;
use taskledger::project::domain::{Project, ProjectDomainError, Task};

/// Scenario world for project task behaviour tests.
///
/// `held` models the caller's own task variables, which are detached from
/// the copies stored in `project`.
#[derive(Default)]
pub struct ProjectWorld {
    pub project: Option<Project>,
    pub held: HashMap<String, Task>,
    pub last_result: Option<Result<(), ProjectDomainError>>,
    pub last_filter: Option<Vec<Task>>,
}

impl ProjectWorld {
    /// Returns the scenario project.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the scenario project mutably.
    pub fn project_mut(&mut self) -> Result<&mut Project, eyre::Report> {
        self.project
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the caller-held task with `title`.
    pub fn held(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.held
            .get(title)
            .ok_or_else(|| eyre::eyre!("no held task titled {title:?}"))
    }

    /// Returns the caller-held task with `title` mutably.
    pub fn held_mut(&mut self, title: &str) -> Result<&mut Task, eyre::Report> {
        self.held
            .get_mut(title)
            .ok_or_else(|| eyre::eyre!("no held task titled {title:?}"))
    }

    /// Looks up the project's stored copy of the task titled `title`.
    pub fn stored(&self, title: &str) -> Result<&Task, eyre::Report> {
        let id = self.held(title)?.id();
        self.project()?
            .task(id)
            .ok_or_else(|| eyre::eyre!("project holds no task titled {title:?}"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}

/// Splits a comma-separated title list from a feature file.
pub fn titles(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}
