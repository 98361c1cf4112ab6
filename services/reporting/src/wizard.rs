//! Wizard state machine
//!
//! Owns the session's progress and accumulated form fragments. Step gates
//! are checked only on `next`/`submit`; field writes never validate, and
//! going backward never clears entered data. Illegal transitions are
//! reported and leave the state unchanged.

use std::collections::HashSet;
use tracing::{debug, warn};
use types::errors::WizardError;
use types::standards::{is_reporting_standard, REPORTING_STANDARDS};
use types::validation::FieldError;

use crate::config::{
    CompanyDraft, CompanyProfile, CompanySize, PeriodDraft, ReportConfiguration, ReportingPeriod,
};
use crate::generator::ReportGenerator;
use crate::steps::WizardStep;

/// Finite-state controller for the reporting wizard.
///
/// Ephemeral session state with no persisted identity; each instance is
/// owned by a single caller. A fresh session after submission requires
/// `reset`.
#[derive(Debug, Clone)]
pub struct WizardController {
    step: WizardStep,
    selected: HashSet<String>,
    period: PeriodDraft,
    company: CompanyDraft,
}

impl WizardController {
    /// Start a new session at step 1 with everything unset
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectStandards,
            selected: HashSet::new(),
            period: PeriodDraft::default(),
            company: CompanyDraft::default(),
        }
    }

    // ── State snapshot ────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Currently selected standard ids (membership set, no ordering)
    pub fn selected_standards(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn period(&self) -> &PeriodDraft {
        &self.period
    }

    pub fn company(&self) -> &CompanyDraft {
        &self.company
    }

    // ── Field writes (never validated here) ──────────────────────────

    /// Toggle a standard in the selection: present is removed, absent is
    /// added. Double-toggle is the identity. Ids outside the reporting
    /// catalog are rejected.
    ///
    /// Returns whether the id is selected after the toggle.
    pub fn toggle_standard(&mut self, id: &str) -> Result<bool, WizardError> {
        if self.step.is_terminal() {
            return Err(self.illegal("toggle_standard"));
        }
        if !is_reporting_standard(id) {
            return Err(WizardError::UnknownStandard { id: id.to_string() });
        }
        if self.selected.remove(id) {
            Ok(false)
        } else {
            self.selected.insert(id.to_string());
            Ok(true)
        }
    }

    pub fn set_period_start(&mut self, start: Option<chrono::NaiveDate>) {
        self.period.start = start;
    }

    pub fn set_period_end(&mut self, end: Option<chrono::NaiveDate>) {
        self.period.end = end;
    }

    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.company.name = name.into();
    }

    pub fn set_company_industry(&mut self, industry: impl Into<String>) {
        self.company.industry = industry.into();
    }

    pub fn set_company_size(&mut self, size: Option<CompanySize>) {
        self.company.size = size;
    }

    // ── Transitions ───────────────────────────────────────────────────

    /// Advance one step. Legal from steps 1-3; step 4's forward action is
    /// `submit`. Gate failures return the unmet fields and the step does
    /// not change.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            // Empty standard selection is a valid configuration.
            WizardStep::SelectStandards => WizardStep::ReportingPeriod,
            WizardStep::ReportingPeriod => {
                self.gate(self.period_errors())?;
                WizardStep::CompanyInfo
            }
            WizardStep::CompanyInfo => {
                self.gate(self.company_errors())?;
                WizardStep::Review
            }
            WizardStep::Review | WizardStep::Complete => {
                return Err(self.illegal("next"));
            }
        };
        debug!(from = self.step.number(), to = target.number(), "wizard advanced");
        self.step = target;
        Ok(self.step)
    }

    /// Go back one step. Legal from steps 2-4. Never validates and never
    /// clears entered data.
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::ReportingPeriod => WizardStep::SelectStandards,
            WizardStep::CompanyInfo => WizardStep::ReportingPeriod,
            WizardStep::Review => WizardStep::CompanyInfo,
            WizardStep::SelectStandards | WizardStep::Complete => {
                return Err(self.illegal("previous"));
            }
        };
        self.step = target;
        Ok(self.step)
    }

    /// Submit the configuration. Legal only from the review step.
    ///
    /// Re-validates every gate as a final check, then materializes the
    /// immutable `ReportConfiguration` (standards in catalog order) and
    /// moves to the terminal step. On failure the step stays at review and
    /// the caller receives the same field-error structure as `next`.
    pub fn submit(&mut self) -> Result<ReportConfiguration, WizardError> {
        if self.step != WizardStep::Review {
            return Err(self.illegal("submit"));
        }

        let mut errors = self.standards_errors();
        errors.extend(self.period_errors());
        errors.extend(self.company_errors());
        self.gate(errors)?;

        // The gate above guarantees these are present.
        let (Some(start), Some(end)) = (self.period.start, self.period.end) else {
            return Err(WizardError::Validation(self.period_errors()));
        };
        let Some(size) = self.company.size else {
            return Err(WizardError::Validation(self.company_errors()));
        };

        let config = ReportConfiguration {
            standards: REPORTING_STANDARDS
                .iter()
                .filter(|s| self.selected.contains(s.id))
                .map(|s| s.id.to_string())
                .collect(),
            period: ReportingPeriod { start, end },
            company: CompanyProfile {
                name: self.company.name.clone(),
                industry: self.company.industry.clone(),
                size,
            },
        };

        self.step = WizardStep::Complete;
        debug!(standards = config.standards.len(), "wizard submitted");
        Ok(config)
    }

    /// Submit and hand the configuration to the report-generation
    /// collaborator. Fire-and-forget: no acknowledgment is awaited.
    pub fn submit_to(&mut self, generator: &mut dyn ReportGenerator) -> Result<(), WizardError> {
        let config = self.submit()?;
        generator.generate(config);
        Ok(())
    }

    /// Discard the session and start over at step 1
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ── Step gates ────────────────────────────────────────────────────

    fn gate(&self, errors: Vec<FieldError>) -> Result<(), WizardError> {
        if errors.is_empty() {
            Ok(())
        } else {
            warn!(
                step = self.step.number(),
                violations = errors.len(),
                "wizard gate failed"
            );
            Err(WizardError::Validation(errors))
        }
    }

    fn illegal(&self, action: &'static str) -> WizardError {
        WizardError::IllegalTransition {
            action,
            step: self.step.number(),
        }
    }

    fn period_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.period.start.is_none() {
            errors.push(FieldError::new("period.start", "start date is required"));
        }
        if self.period.end.is_none() {
            errors.push(FieldError::new("period.end", "end date is required"));
        }
        if let (Some(start), Some(end)) = (self.period.start, self.period.end) {
            if end < start {
                errors.push(FieldError::new(
                    "period.end",
                    "end date must not precede start date",
                ));
            }
        }
        errors
    }

    fn company_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.company.name.trim().is_empty() {
            errors.push(FieldError::new("company.name", "must not be empty"));
        }
        if self.company.industry.trim().is_empty() {
            errors.push(FieldError::new("company.industry", "must not be empty"));
        }
        if self.company.size.is_none() {
            errors.push(FieldError::new("company.size", "is required"));
        }
        errors
    }

    fn standards_errors(&self) -> Vec<FieldError> {
        // Toggle already guards membership; re-checked here as the final
        // submit gate since the selection set is caller-visible state.
        self.selected
            .iter()
            .filter(|id| !is_reporting_standard(id))
            .map(|id| FieldError::new("standards", format!("unknown standard: {id}")))
            .collect()
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Drive a fresh wizard to the review step with valid data
    fn wizard_at_review() -> WizardController {
        let mut wizard = WizardController::new();
        wizard.toggle_standard("gri").unwrap();
        wizard.toggle_standard("cdp").unwrap();
        wizard.next().unwrap();
        wizard.set_period_start(Some(date(2024, 1, 1)));
        wizard.set_period_end(Some(date(2024, 12, 31)));
        wizard.next().unwrap();
        wizard.set_company_name("Acme");
        wizard.set_company_industry("Manufacturing");
        wizard.set_company_size(Some(CompanySize::Medium));
        wizard.next().unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);
        wizard
    }

    // ── Standards step ──

    #[test]
    fn test_initial_state() {
        let wizard = WizardController::new();
        assert_eq!(wizard.step(), WizardStep::SelectStandards);
        assert!(wizard.selected_standards().is_empty());
        assert!(wizard.period().start.is_none());
        assert!(wizard.company().name.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wizard = WizardController::new();
        assert!(wizard.toggle_standard("gri").unwrap());
        assert!(wizard.selected_standards().contains("gri"));
        assert!(!wizard.toggle_standard("gri").unwrap());
        assert!(wizard.selected_standards().is_empty());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut wizard = WizardController::new();
        wizard.toggle_standard("sasb").unwrap();
        let before: Vec<String> = wizard.selected_standards().iter().cloned().collect();
        wizard.toggle_standard("tcfd").unwrap();
        wizard.toggle_standard("tcfd").unwrap();
        let after: Vec<String> = wizard.selected_standards().iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_rejects_unknown_standard() {
        let mut wizard = WizardController::new();
        let err = wizard.toggle_standard("iso14001").unwrap_err();
        assert!(matches!(err, WizardError::UnknownStandard { .. }));
        assert!(wizard.selected_standards().is_empty());
    }

    #[test]
    fn test_empty_selection_advances() {
        // An empty standards selection is a valid, if unusual, configuration.
        let mut wizard = WizardController::new();
        assert_eq!(wizard.next().unwrap(), WizardStep::ReportingPeriod);
    }

    // ── Period step ──

    #[test]
    fn test_period_gate_requires_both_dates() {
        let mut wizard = WizardController::new();
        wizard.next().unwrap();
        wizard.set_period_start(Some(date(2024, 1, 1)));

        let err = wizard.next().unwrap_err();
        match err {
            WizardError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "period.end");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(wizard.step(), WizardStep::ReportingPeriod);
    }

    #[test]
    fn test_period_gate_rejects_inverted_range() {
        let mut wizard = WizardController::new();
        wizard.next().unwrap();
        wizard.set_period_start(Some(date(2024, 6, 1)));
        wizard.set_period_end(Some(date(2024, 1, 1)));

        let err = wizard.next().unwrap_err();
        match err {
            WizardError::Validation(errors) => {
                assert_eq!(errors[0].field, "period.end");
                assert!(errors[0].reason.contains("precede"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        // Not auto-corrected, step unchanged.
        assert_eq!(wizard.step(), WizardStep::ReportingPeriod);
        assert_eq!(wizard.period().start, Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let mut wizard = WizardController::new();
        wizard.next().unwrap();
        wizard.set_period_start(Some(date(2024, 3, 15)));
        wizard.set_period_end(Some(date(2024, 3, 15)));
        assert_eq!(wizard.next().unwrap(), WizardStep::CompanyInfo);
    }

    // ── Company step ──

    #[test]
    fn test_company_gate_lists_all_missing_fields() {
        let mut wizard = WizardController::new();
        wizard.next().unwrap();
        wizard.set_period_start(Some(date(2024, 1, 1)));
        wizard.set_period_end(Some(date(2024, 12, 31)));
        wizard.next().unwrap();

        let err = wizard.next().unwrap_err();
        match err {
            WizardError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(
                    fields,
                    vec!["company.name", "company.industry", "company.size"]
                );
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(wizard.step(), WizardStep::CompanyInfo);
    }

    #[test]
    fn test_partial_entry_is_never_blocked() {
        let mut wizard = WizardController::new();
        // Writes at any step are accepted without validation.
        wizard.set_company_name("A");
        wizard.set_company_name("Ac");
        wizard.set_company_name("Acme");
        assert_eq!(wizard.company().name, "Acme");
    }

    // ── Backward navigation ──

    #[test]
    fn test_previous_never_clears_data() {
        let mut wizard = wizard_at_review();

        // 4 → 3 → 2, then forward again.
        wizard.previous().unwrap();
        wizard.previous().unwrap();
        assert_eq!(wizard.step(), WizardStep::ReportingPeriod);

        wizard.next().unwrap();
        assert_eq!(wizard.step(), WizardStep::CompanyInfo);
        assert_eq!(wizard.company().name, "Acme");
        assert_eq!(wizard.company().industry, "Manufacturing");
        assert_eq!(wizard.company().size, Some(CompanySize::Medium));
        assert_eq!(wizard.period().start, Some(date(2024, 1, 1)));
        assert_eq!(wizard.selected_standards().len(), 2);
    }

    #[test]
    fn test_previous_from_first_step_is_illegal() {
        let mut wizard = WizardController::new();
        let err = wizard.previous().unwrap_err();
        assert!(matches!(
            err,
            WizardError::IllegalTransition {
                action: "previous",
                step: 1
            }
        ));
        assert_eq!(wizard.step(), WizardStep::SelectStandards);
    }

    // ── Submit ──

    #[test]
    fn test_full_happy_path() {
        let mut wizard = wizard_at_review();
        let config = wizard.submit().unwrap();

        assert_eq!(wizard.step(), WizardStep::Complete);
        // Catalog order, not selection order.
        assert_eq!(config.standards, vec!["gri", "cdp"]);
        assert_eq!(config.period.start, date(2024, 1, 1));
        assert_eq!(config.period.end, date(2024, 12, 31));
        assert_eq!(config.company.name, "Acme");
        assert_eq!(config.company.industry, "Manufacturing");
        assert_eq!(config.company.size, CompanySize::Medium);
    }

    #[test]
    fn test_standards_ordered_by_catalog() {
        let mut wizard = WizardController::new();
        // Select in reverse catalog order.
        wizard.toggle_standard("cdp").unwrap();
        wizard.toggle_standard("tcfd").unwrap();
        wizard.toggle_standard("gri").unwrap();
        wizard.next().unwrap();
        wizard.set_period_start(Some(date(2024, 1, 1)));
        wizard.set_period_end(Some(date(2024, 12, 31)));
        wizard.next().unwrap();
        wizard.set_company_name("Acme");
        wizard.set_company_industry("Energy");
        wizard.set_company_size(Some(CompanySize::Large));
        wizard.next().unwrap();

        let config = wizard.submit().unwrap();
        assert_eq!(config.standards, vec!["gri", "tcfd", "cdp"]);
    }

    #[test]
    fn test_submit_before_review_is_illegal() {
        let mut wizard = WizardController::new();
        wizard.next().unwrap(); // now at step 2
        let err = wizard.submit().unwrap_err();
        assert!(matches!(
            err,
            WizardError::IllegalTransition {
                action: "submit",
                step: 2
            }
        ));
        assert_eq!(wizard.step(), WizardStep::ReportingPeriod);
    }

    #[test]
    fn test_submit_revalidates_period() {
        let mut wizard = wizard_at_review();
        // Corrupt the period after passing the step-2 gate.
        wizard.set_period_end(Some(date(2023, 1, 1)));

        let err = wizard.submit().unwrap_err();
        assert!(matches!(err, WizardError::Validation(_)));
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_terminal_step_rejects_transitions() {
        let mut wizard = wizard_at_review();
        wizard.submit().unwrap();

        assert!(wizard.next().is_err());
        assert!(wizard.previous().is_err());
        assert!(wizard.submit().is_err());
        assert!(wizard.toggle_standard("gri").is_err());
        assert_eq!(wizard.step(), WizardStep::Complete);
    }

    #[test]
    fn test_reset_starts_fresh_session() {
        let mut wizard = wizard_at_review();
        wizard.submit().unwrap();

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::SelectStandards);
        assert!(wizard.selected_standards().is_empty());
        assert!(wizard.period().start.is_none());
        assert!(wizard.company().name.is_empty());
    }

    // ── Handoff ──

    struct RecordingGenerator {
        received: Vec<ReportConfiguration>,
    }

    impl ReportGenerator for RecordingGenerator {
        fn generate(&mut self, config: ReportConfiguration) {
            self.received.push(config);
        }
    }

    #[test]
    fn test_submit_to_hands_off_configuration() {
        let mut wizard = wizard_at_review();
        let mut generator = RecordingGenerator {
            received: Vec::new(),
        };

        wizard.submit_to(&mut generator).unwrap();
        assert_eq!(wizard.step(), WizardStep::Complete);
        assert_eq!(generator.received.len(), 1);
        assert_eq!(generator.received[0].company.name, "Acme");
    }

    #[test]
    fn test_failed_submit_hands_off_nothing() {
        let mut wizard = WizardController::new();
        let mut generator = RecordingGenerator {
            received: Vec::new(),
        };

        assert!(wizard.submit_to(&mut generator).is_err());
        assert!(generator.received.is_empty());
    }
}
