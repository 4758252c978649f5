//! Taskledger: a minimal in-memory project and task tracker.
//!
//! A project owns an ordered list of tasks. Each task carries a title, a
//! description and an `Open`/`Closed` status that only moves forward.
//!
//! # Architecture
//!
//! The crate is a pure domain library with no infrastructure dependencies:
//!
//! - **Domain**: validated identifiers, the [`project::domain::Task`]
//!   lifecycle and the [`project::domain::Project`] aggregate
//! - **Report**: a plain-text rendering of a project for terminals
//!
//! Persistence, identifier generation policy and concurrency control belong
//! to the embedding application.
//!
//! # Modules
//!
//! - [`project`]: project aggregate, task lifecycle and reporting

pub mod project;
