//! Human-readable project report.

use super::Project;
use std::fmt;
use std::io::{self, Write};
use tracing::warn;

/// Layout settings for [`ProjectReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    /// Width in characters of the `=` and `-` separator rules.
    pub rule_width: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self { rule_width: 80 }
    }
}

impl ReportLayout {
    /// Creates a layout with narrower rules for constrained terminals.
    #[must_use]
    pub const fn compact() -> Self {
        Self { rule_width: 40 }
    }
}

/// Borrowed view that renders a project listing through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct ProjectReport<'a> {
    project: &'a Project,
    layout: ReportLayout,
}

impl<'a> ProjectReport<'a> {
    /// Creates a report with the default layout.
    #[must_use]
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            layout: ReportLayout::default(),
        }
    }

    /// Replaces the layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    fn rule(&self, f: &mut fmt::Formatter<'_>, fill: char) -> fmt::Result {
        let width = self.layout.rule_width;
        let line: String = std::iter::repeat_n(fill, width).collect();
        writeln!(f, "{line}")
    }
}

impl fmt::Display for ProjectReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project = self.project;
        self.rule(f, '=')?;
        writeln!(f, "Project Info")?;
        writeln!(f, "ID: {}", project.id())?;
        writeln!(f, "Name: {}", project.name())?;
        self.rule(f, '-')?;
        writeln!(f, "Tasks: ")?;
        for (position, task) in (1_usize..).zip(project.tasks()) {
            self.rule(f, '-')?;
            writeln!(f, "Task: {position}")?;
            writeln!(f, "ID: {}", task.id())?;
            writeln!(f, "Title: {}", task.title())?;
            writeln!(f, "Description: {}", task.description())?;
            writeln!(f, "Status: {}", task.status())?;
        }
        self.rule(f, '=')?;
        write!(f, "\n\n")
    }
}

impl Project {
    /// Returns a displayable report of this project.
    #[must_use]
    pub fn report(&self) -> ProjectReport<'_> {
        ProjectReport::new(self)
    }

    /// Writes the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.report())?;
        out.flush()
    }

    /// Prints the report to standard output.
    ///
    /// Write failures are logged and otherwise ignored.
    pub fn print_info(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(error) = self.write_report(&mut handle) {
            warn!(project_id = %self.id(), %error, "failed to print project report");
        }
    }
}
