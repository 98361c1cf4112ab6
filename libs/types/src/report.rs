//! Sustainability report types

use crate::ids::ReportId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportKind {
    Csr,
    Esg,
}

/// Report approval status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Approved,
}

impl ReportStatus {
    /// Stable display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Submitted => "submitted",
            ReportStatus::Approved => "approved",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A filed sustainability report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub kind: ReportKind,
    pub status: ReportStatus,
    pub submission_date: NaiveDate,
}

impl Report {
    /// Create a new draft report with a fresh id
    pub fn new(title: impl Into<String>, kind: ReportKind, submission_date: NaiveDate) -> Self {
        Self {
            id: ReportId::new(),
            title: title.into(),
            kind,
            status: ReportStatus::Draft,
            submission_date,
        }
    }
}
