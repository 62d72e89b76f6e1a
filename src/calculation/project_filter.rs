//! Project list filtering.

use serde::{Deserialize, Serialize};

use crate::models::{Project, ProjectStatus};

/// Which projects to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "status")]
pub enum ProjectFilter {
    /// Every project.
    #[default]
    All,
    /// Only projects with the given status.
    Status(ProjectStatus),
}

/// Filters projects, keeping input order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| match filter {
            ProjectFilter::All => true,
            ProjectFilter::Status(status) => project.status == status,
        })
        .collect()
}

/// Team member names joined by `", "`.
pub fn team_names(project: &Project) -> String {
    project
        .team
        .iter()
        .map(|member| member.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamMember;

    fn project(name: &str, status: ProjectStatus) -> Project {
        Project {
            id: None,
            name: name.to_string(),
            start_date: None,
            deadline: None,
            team: vec![],
            progress: 0,
            status,
        }
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let projects = vec![
            project("a", ProjectStatus::Completed),
            project("b", ProjectStatus::InProgress),
        ];
        let names: Vec<&str> = filter_projects(&projects, ProjectFilter::All)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_status_filter() {
        let projects = vec![
            project("a", ProjectStatus::OnHold),
            project("b", ProjectStatus::InProgress),
            project("c", ProjectStatus::OnHold),
        ];
        let names: Vec<&str> =
            filter_projects(&projects, ProjectFilter::Status(ProjectStatus::OnHold))
                .iter()
                .map(|p| p.name.as_str())
                .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_deserializes_tagged() {
        let filter: ProjectFilter =
            serde_json::from_str(r#"{ "kind": "status", "status": "On Hold" }"#).unwrap();
        assert_eq!(filter, ProjectFilter::Status(ProjectStatus::OnHold));

        let filter: ProjectFilter = serde_json::from_str(r#"{ "kind": "all" }"#).unwrap();
        assert_eq!(filter, ProjectFilter::All);
    }

    #[test]
    fn test_team_names() {
        let mut p = project("a", ProjectStatus::InProgress);
        assert_eq!(team_names(&p), "");

        p.team = vec![
            TeamMember {
                name: "Asha".to_string(),
            },
            TeamMember {
                name: "Ravi".to_string(),
            },
        ];
        assert_eq!(team_names(&p), "Asha, Ravi");
    }
}
