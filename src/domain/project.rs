use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a project on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// A work item on the board
///
/// Everything except `status` is fixed at creation. Status changes go
/// through [`crate::store::ProjectStore::move_project`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project with a freshly generated id
    pub fn new(title: String, description: String, people: u32) -> Self {
        Self {
            id: ProjectId::generate(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Human readable head count, e.g. "1 person" or "3 persons"
    pub fn persons(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new("A".to_string(), "a description".to_string(), 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, 3);
        assert!(!project.id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = ProjectId::generate();
        let b = ProjectId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_persons_pluralization() {
        let mut project = Project::new("A".to_string(), "a description".to_string(), 1);
        assert_eq!(project.persons(), "1 person");

        project.people = 2;
        assert_eq!(project.persons(), "2 persons");

        project.people = 5;
        assert_eq!(project.persons(), "5 persons");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProjectStatus::Finished).unwrap();
        assert_eq!(json, "\"finished\"");

        let status: ProjectStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, ProjectStatus::Active);
    }

    #[test]
    fn test_project_id_serializes_as_plain_string() {
        let project = Project::new("A".to_string(), "a description".to_string(), 2);
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["id"], project.id.as_str());
        assert_eq!(json["status"], "active");
    }
}
