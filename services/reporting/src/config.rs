//! Wizard form data and the submitted configuration
//!
//! Draft types hold whatever the user has typed so far (fields optional,
//! unvalidated). `ReportConfiguration` is the immutable value produced at
//! submit time, with every field present and checked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Company size bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    /// Fewer than 50 employees
    Small,
    /// 50-250 employees
    Medium,
    /// More than 250 employees
    Large,
}

impl CompanySize {
    /// Stable form-value label
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
        }
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(CompanySize::Small),
            "medium" => Ok(CompanySize::Medium),
            "large" => Ok(CompanySize::Large),
            other => Err(format!("unknown company size: {other}")),
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reporting period as entered so far; both dates optional until the
/// step-2 gate passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodDraft {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Company information as entered so far; all fields required once the
/// step-3 gate passes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub industry: String,
    pub size: Option<CompanySize>,
}

/// Validated reporting period: `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Complete company profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub size: CompanySize,
}

/// The immutable value the wizard materializes on submit.
///
/// `standards` is ordered by catalog order, not selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfiguration {
    pub standards: Vec<String>,
    pub period: ReportingPeriod,
    pub company: CompanyProfile,
}
