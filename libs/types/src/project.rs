//! CSR project types

use crate::ids::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planned,
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Stable display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "planned",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A CSR/sustainability project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new project with a fresh id
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: description.into(),
            status,
        }
    }
}
