//! Project assignment model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Tone;
use super::calendar::{lenient_date, null_as_default};

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Work is ongoing.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Delivered.
    Completed,
    /// Paused.
    #[serde(rename = "On Hold")]
    OnHold,
    /// A label the engine does not recognize, or no label at all.
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl ProjectStatus {
    /// The label shown on the badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Unrecognized => "Unknown",
        }
    }

    /// The badge tone for this status.
    pub fn tone(self) -> Tone {
        match self {
            Self::InProgress => Tone::Info,
            Self::Completed => Tone::Success,
            Self::OnHold => Tone::Warning,
            Self::Unrecognized => Tone::Neutral,
        }
    }
}

/// A member of a project team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A project the employee is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend identifier.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Project name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Start date.
    #[serde(default, with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    /// Delivery deadline.
    #[serde(default, with = "lenient_date")]
    pub deadline: Option<NaiveDate>,
    /// Team members.
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: Vec<TeamMember>,
    /// Completion percentage as reported by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: u32,
    /// Delivery status; unrecognized when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProjectStatus,
}
