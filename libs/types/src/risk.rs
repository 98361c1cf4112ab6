//! Risk assessment types
//!
//! A risk record pairs a likelihood and impact rating (each on a bounded
//! 1-5 scale) with a category and mitigation strategy. The risk level is
//! never stored on the record: it is derived from likelihood x impact at
//! read time so an edit can never leave a stale level behind.

use crate::errors::RiskError;
use crate::ids::RiskId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ESG risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Environmental,
    Social,
    Governance,
}

impl RiskCategory {
    /// Stable display label
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Environmental => "Environmental",
            RiskCategory::Social => "Social",
            RiskCategory::Governance => "Governance",
        }
    }

    /// All categories in canonical order
    pub fn all() -> [RiskCategory; 3] {
        [
            RiskCategory::Environmental,
            RiskCategory::Social,
            RiskCategory::Governance,
        ]
    }
}

impl FromStr for RiskCategory {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Environmental" => Ok(RiskCategory::Environmental),
            "Social" => Ok(RiskCategory::Social),
            "Governance" => Ok(RiskCategory::Governance),
            other => Err(RiskError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived risk classification
///
/// Ordering follows severity: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Stable display label
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bounded rating on the 1-5 assessment scale
///
/// Invariant: 1 <= value <= 5. The only way to obtain a `Rating` is through
/// `new`/`try_from`, so a stored `Risk` can never hold an out-of-range
/// likelihood or impact. Out-of-range input is an explicit error, never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

/// Lowest valid rating value
pub const RATING_MIN: u8 = 1;
/// Highest valid rating value
pub const RATING_MAX: u8 = 5;

impl Rating {
    /// Create a rating, rejecting values outside [1,5]
    pub fn new(value: u8) -> Result<Self, RiskError> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RiskError::RatingOutOfRange {
                value: value as i64,
            })
        }
    }

    /// Get the raw value (guaranteed in [1,5])
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RiskError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RiskError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| RiskError::RatingOutOfRange { value })
            .and_then(Rating::new)
            .map_err(|_| RiskError::RatingOutOfRange { value })
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated risk record
///
/// Constructed through the risk engine (`RiskRegistry::upsert`), which
/// assigns the id and enforces the field constraints. The id is immutable
/// once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: RiskId,
    pub name: String,
    pub category: RiskCategory,
    pub likelihood: Rating,
    pub impact: Rating,
    pub mitigation_strategy: String,
}

impl Risk {
    /// Create a risk record from already-validated parts
    pub fn new(
        id: RiskId,
        name: impl Into<String>,
        category: RiskCategory,
        likelihood: Rating,
        impact: Rating,
        mitigation_strategy: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            likelihood,
            impact,
            mitigation_strategy: mitigation_strategy.into(),
        }
    }
}

/// Raw caller-supplied risk candidate, prior to validation
///
/// Carries unparsed field values so the validator can report every
/// violation as field-level data instead of failing on the first bad
/// input. `id` is `None` for a create and `Some` for an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDraft {
    pub id: Option<RiskId>,
    pub name: String,
    pub category: String,
    pub likelihood: i64,
    pub impact: i64,
    pub mitigation_strategy: String,
}

impl RiskDraft {
    /// Convert into a validated record under the given id.
    ///
    /// Performs only the typed conversions (category parse, rating range);
    /// textual constraints are the validator's job and are expected to have
    /// been checked already.
    pub fn into_risk(self, id: RiskId) -> Result<Risk, RiskError> {
        let category = RiskCategory::from_str(&self.category)?;
        let likelihood = Rating::try_from(self.likelihood)?;
        let impact = Rating::try_from(self.impact)?;
        Ok(Risk::new(
            id,
            self.name,
            category,
            likelihood,
            impact,
            self.mitigation_strategy,
        ))
    }
}
