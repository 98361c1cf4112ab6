//! Wizard step definitions
//!
//! Linear topology, no branching, no skip-ahead:
//!
//! ```text
//! 1 SelectStandards → 2 ReportingPeriod → 3 CompanyInfo → 4 Review → 5 Complete
//! ```
//!
//! `Complete` is terminal and only reachable through `submit`.

use serde::{Deserialize, Serialize};

/// A step in the reporting wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Step 1: choose reporting standards (empty selection is legal)
    SelectStandards,
    /// Step 2: set the reporting period
    ReportingPeriod,
    /// Step 3: enter company information
    CompanyInfo,
    /// Step 4: review; forward action is `submit`, not `next`
    Review,
    /// Step 5: configuration submitted (terminal)
    Complete,
}

impl WizardStep {
    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::SelectStandards => 1,
            WizardStep::ReportingPeriod => 2,
            WizardStep::CompanyInfo => 3,
            WizardStep::Review => 4,
            WizardStep::Complete => 5,
        }
    }

    /// Display label for the progress indicator
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::SelectStandards => "Select Standards",
            WizardStep::ReportingPeriod => "Reporting Period",
            WizardStep::CompanyInfo => "Company Info",
            WizardStep::Review => "Review",
            WizardStep::Complete => "Complete",
        }
    }

    /// Whether this step is terminal (no further transitions)
    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Complete)
    }
}
