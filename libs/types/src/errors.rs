//! Error types for the platform core
//!
//! Comprehensive error taxonomy using thiserror. Recoverable validation
//! outcomes live in `validation` as data; the errors here are either
//! rejected writes, caller precondition violations, or illegal wizard
//! transitions.

use crate::validation::FieldError;
use thiserror::Error;

/// Risk engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// Caller passed a likelihood or impact outside the 1-5 scale.
    /// This is a precondition violation, never silently clamped.
    #[error("rating out of range: {value} (must be between 1 and 5)")]
    RatingOutOfRange { value: i64 },

    /// Caller passed a category outside the fixed ESG set
    #[error("unknown risk category: {0}")]
    UnknownCategory(String),

    /// A write was refused because the candidate failed validation;
    /// the prior mapping is untouched
    #[error("risk rejected: {} field violation(s)", .0.len())]
    Rejected(Vec<FieldError>),
}

/// Reporting wizard errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// A step gate failed; the step did not change and the caller should
    /// re-prompt with the listed fields
    #[error("validation failed: {} field violation(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The operation is not defined at the current step; state is unchanged
    #[error("{action} is not legal at step {step}")]
    IllegalTransition { action: &'static str, step: u8 },

    /// The id is not part of the reporting-standard catalog
    #[error("unknown reporting standard: {id}")]
    UnknownStandard { id: String },
}
