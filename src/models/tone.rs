//! Display tone shared by every status badge.

use serde::{Deserialize, Serialize};

/// The visual weight a status badge should carry.
///
/// Presentation layers map each tone to their own colours; the engine only
/// decides which tone a status deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Finished or approved.
    Success,
    /// In progress.
    Info,
    /// Waiting on someone else.
    Warning,
    /// Missing or refused.
    Danger,
    /// Unrecognized; shown without emphasis.
    Neutral,
}
