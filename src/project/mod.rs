//! In-memory project and task tracking.
//!
//! A [`domain::Project`] owns an ordered list of [`domain::Task`] values.
//! Tasks move through a one-way `Open` to `Closed` lifecycle. Task-level
//! mutations act on the value the caller holds; a project sees them only
//! after [`domain::Project::update_task`] stores the changed value.

pub mod domain;

#[cfg(test)]
mod tests;
