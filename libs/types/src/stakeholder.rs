//! Stakeholder engagement types

use crate::ids::StakeholderId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An engaged stakeholder (employee, investor, customer, ...)
///
/// `kind` and `status` are free text: the engagement workflow does not
/// constrain them to a fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: StakeholderId,
    pub name: String,
    pub kind: String,
    pub last_interaction: NaiveDate,
    pub status: String,
}

impl Stakeholder {
    /// Create a new stakeholder with a fresh id
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        last_interaction: NaiveDate,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: StakeholderId::new(),
            name: name.into(),
            kind: kind.into(),
            last_interaction,
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stakeholder_round_trip() {
        let stakeholder = Stakeholder::new(
            "Jane Smith",
            "Investor",
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            "Follow-up required",
        );
        let json = serde_json::to_string(&stakeholder).unwrap();
        let back: Stakeholder = serde_json::from_str(&json).unwrap();
        assert_eq!(stakeholder, back);
    }
}
