use crate::domain::project::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a board lane
///
/// Each lane shows exactly the projects whose status matches its kind and
/// moves dropped projects into that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneKind {
    Active,
    Finished,
}

impl LaneKind {
    pub const ALL: [LaneKind; 2] = [LaneKind::Active, LaneKind::Finished];

    /// Lowercase name used to derive element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Status a project takes when dropped on this lane
    pub fn status(&self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    /// Id stamped onto the lane's root element
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Id of the list element that hosts the lane's items
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.as_str())
    }

    /// Heading shown above the lane
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }

    /// Filters a snapshot down to this lane's projects, keeping insertion order
    pub fn filter(&self, snapshot: &[Project]) -> Vec<Project> {
        let status = self.status();
        snapshot
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect()
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
