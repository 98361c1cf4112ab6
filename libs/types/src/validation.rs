//! Field-level validation results
//!
//! Recoverable validation outcomes are data, not failures: a check returns
//! either `Valid` or the ordered list of field violations, and the caller
//! re-prompts. Nothing here aborts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field violation: which field, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Outcome of validating a candidate record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// All constraints satisfied
    Valid,
    /// One or more violations, in field order
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Build a result from collected violations (empty list means valid)
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The violations, empty when valid
    pub fn errors(&self) -> &[FieldError] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(errors) => errors,
        }
    }

    /// Consume into the violation list, empty when valid
    pub fn into_errors(self) -> Vec<FieldError> {
        match self {
            ValidationResult::Valid => Vec::new(),
            ValidationResult::Invalid(errors) => errors,
        }
    }
}
