//! Given steps for project task tracking BDD scenarios.

use super::world::ProjectWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskledger::project::domain::{Project, Task};
use uuid::Uuid;

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut ProjectWorld, name: String) -> Result<(), eyre::Report> {
    let project = Project::new(Uuid::new_v4(), name).wrap_err("create scenario project")?;
    world.project = Some(project);
    Ok(())
}

#[given(r#"a task "{title}" described as "{description}""#)]
fn task_described_as(
    world: &mut ProjectWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let task =
        Task::new(Uuid::new_v4(), title.clone(), description).wrap_err("create scenario task")?;
    world.held.insert(title, task);
    Ok(())
}

#[given(r#"the task "{title}" has been added to the project"#)]
fn task_has_been_added(world: &mut ProjectWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.held(&title)?.clone();
    world
        .project_mut()?
        .add_task(task)
        .wrap_err("add task in scenario setup")?;
    Ok(())
}
