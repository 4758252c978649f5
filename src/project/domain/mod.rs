//! Domain model for projects and their tasks.
//!
//! Everything here is plain in-memory data. Constructors validate their
//! inputs and every mutator validates before it writes, so a failed call
//! leaves the value untouched.

mod error;
mod ids;
mod project;
mod report;
mod task;

pub use error::{ArgumentError, ErrorKind, ParseTaskStatusError, ProjectDomainError};
pub use ids::{ProjectId, TaskId};
pub use project::Project;
pub use report::{ProjectReport, ReportLayout};
pub use task::{Task, TaskStatus};
