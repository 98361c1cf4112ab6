//! Risk candidate validation
//!
//! Checks a raw `RiskDraft` against the record constraints and reports
//! every violation as field-level data. Per-field checks are independent:
//! an empty name is reported regardless of whether the ratings are valid.

use std::str::FromStr;
use types::risk::{RiskCategory, RiskDraft, RATING_MAX, RATING_MIN};
use types::validation::{FieldError, ValidationResult};

/// Validate a risk candidate.
///
/// Checks, in field order:
/// 1. `name` is non-empty
/// 2. `category` is one of the fixed ESG categories
/// 3. `likelihood` is an integer in [1,5]
/// 4. `impact` is an integer in [1,5]
/// 5. `mitigation_strategy` is non-empty
///
/// Does not mutate and never aborts; violations are data.
pub fn validate(draft: &RiskDraft) -> ValidationResult {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::new("name", "must not be empty"));
    }

    if RiskCategory::from_str(&draft.category).is_err() {
        errors.push(FieldError::new(
            "category",
            format!(
                "unknown category: {} (expected Environmental, Social, or Governance)",
                draft.category
            ),
        ));
    }

    if !rating_in_range(draft.likelihood) {
        errors.push(FieldError::new(
            "likelihood",
            format!("must be between 1 and 5, got {}", draft.likelihood),
        ));
    }

    if !rating_in_range(draft.impact) {
        errors.push(FieldError::new(
            "impact",
            format!("must be between 1 and 5, got {}", draft.impact),
        ));
    }

    if draft.mitigation_strategy.trim().is_empty() {
        errors.push(FieldError::new("mitigationStrategy", "must not be empty"));
    }

    ValidationResult::from_errors(errors)
}

fn rating_in_range(value: i64) -> bool {
    (RATING_MIN as i64..=RATING_MAX as i64).contains(&value)
}
