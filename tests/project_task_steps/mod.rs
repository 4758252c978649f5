//! Step definitions for project task tracking scenarios.

pub mod given;
pub mod world;
