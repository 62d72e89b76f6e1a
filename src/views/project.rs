//! Project table view models.

use serde::{Deserialize, Serialize};

use crate::calculation::{ProjectFilter, filter_projects, format_optional_date, team_names};
use crate::config::DisplayConfig;
use crate::models::{Project, ProjectStatus, Tone};

/// One row of the project table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRow {
    /// Project name.
    pub name: String,
    /// Start date, as `dd/mm/yyyy`.
    pub start_date: String,
    /// Deadline, as `dd/mm/yyyy`.
    pub deadline: String,
    /// Team member names.
    pub team: String,
    /// Progress percentage, capped at 100.
    pub progress: u32,
    /// Delivery status.
    pub status: ProjectStatus,
    /// Label for the status badge.
    pub status_label: String,
    /// Tone for the status badge.
    pub tone: Tone,
}

/// Builds one project row.
pub fn project_row(project: &Project, config: &DisplayConfig) -> ProjectRow {
    ProjectRow {
        name: project.name.clone(),
        start_date: format_optional_date(project.start_date, &config.placeholders.date),
        deadline: format_optional_date(project.deadline, &config.placeholders.date),
        team: team_names(project),
        progress: project.progress.min(100),
        status: project.status,
        status_label: project.status.label().to_string(),
        tone: project.status.tone(),
    }
}

/// Filters projects and builds their rows.
pub fn project_rows(
    projects: &[Project],
    filter: ProjectFilter,
    config: &DisplayConfig,
) -> Vec<ProjectRow> {
    filter_projects(projects, filter)
        .into_iter()
        .map(|project| project_row(project, config))
        .collect()
}
